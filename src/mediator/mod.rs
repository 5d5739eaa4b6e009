//! In-process request dispatch.
//!
//! Commands and queries are plain values implementing [`Request`]; each request type
//! is routed to the single [`RequestHandler`] registered for it. Handlers can publish
//! [`Event`]s which are delivered to every subscriber of that event type.

/// Module for the request-response pair.
mod request;
pub use request::*;

/// Module for the domain events.
mod event;
pub use event::*;

/// Module for the default mediator and its builder.
mod default_mediator;
pub use default_mediator::*;

/// A mediator is a central hub for communication between components.
pub trait Mediator {
    /// Sends a request to the handler registered for its type.
    fn send<Req, Res>(&mut self, req: Req) -> crate::Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static;

    /// Publish an event to every subscriber of its type.
    fn publish<E>(&mut self, event: E) -> crate::Result<()>
    where
        E: Event + Send + 'static;
}
