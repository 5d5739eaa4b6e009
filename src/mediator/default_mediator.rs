use crate::error::Error;
use crate::mediator::{Event, EventHandler, Mediator, Request, RequestHandler};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

type SharedHandler<H> = Arc<Mutex<HashMap<TypeId, H>>>;
type BoxedAny = Box<dyn Any + Send>;

// A wrapper around the request handler to handle the request and return the result.
// Requests and responses are boxed as `Any` so handlers of any type fit in one map.
#[derive(Clone)]
struct RequestHandlerWrapper {
    #[allow(clippy::type_complexity)]
    handler: Arc<Mutex<dyn FnMut(BoxedAny) -> crate::Result<BoxedAny> + Send>>,
}

impl RequestHandlerWrapper {
    fn new<Req, Res, H>(mut handler: H) -> Self
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
        H: RequestHandler<Req, Res> + Send + 'static,
    {
        let f = move |req: BoxedAny| -> crate::Result<BoxedAny> {
            let req = req
                .downcast::<Req>()
                .map_err(|_| Error::HandlerNotFound(type_name::<Req>()))?;
            let res = handler.handle(*req)?;
            Ok(Box::new(res))
        };

        RequestHandlerWrapper {
            handler: Arc::new(Mutex::new(f)),
        }
    }

    fn handle<Req, Res>(&self, req: Req) -> crate::Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
    {
        let req: BoxedAny = Box::new(req);
        let mut handler = self.handler.lock()?;
        let res = (&mut *handler)(req)?;

        // Handlers are keyed by request type only.
        res.downcast::<Res>()
            .map(|res| *res)
            .map_err(|_| Error::ResponseTypeMismatch(type_name::<Req>()))
    }
}

// A wrapper around the event handler, boxed the same way as requests.
#[derive(Clone)]
struct EventHandlerWrapper {
    #[allow(clippy::type_complexity)]
    handler: Arc<Mutex<dyn FnMut(BoxedAny) + Send>>,
}

impl EventHandlerWrapper {
    fn new<E, H>(mut handler: H) -> Self
    where
        E: Event + Send + 'static,
        H: EventHandler<E> + Send + 'static,
    {
        let f = move |event: BoxedAny| {
            if let Ok(event) = event.downcast::<E>() {
                handler.handle(*event);
            }
        };

        EventHandlerWrapper {
            handler: Arc::new(Mutex::new(f)),
        }
    }

    fn handle<E>(&self, event: E) -> crate::Result<()>
    where
        E: Event + Send + 'static,
    {
        let event: BoxedAny = Box::new(event);
        let mut handler = self.handler.lock()?;
        (&mut *handler)(event);
        Ok(())
    }
}

/// Default [`Mediator`] implementation.
///
/// Clones share the same registrations, so a handler holding a clone can publish
/// events to the subscribers of the mediator that dispatched it.
///
/// ```
/// use catalog::mediator::{DefaultMediator, Mediator, Request, RequestHandler};
///
/// struct TwoTimes(i64);
/// impl Request<i64> for TwoTimes {}
///
/// struct TwoTimesHandler;
/// impl RequestHandler<TwoTimes, i64> for TwoTimesHandler {
///     fn handle(&mut self, req: TwoTimes) -> catalog::Result<i64> {
///         Ok(req.0 * 2)
///     }
/// }
///
/// let mut mediator = DefaultMediator::builder()
///     .add_handler(TwoTimesHandler)
///     .build();
///
/// assert_eq!(8, mediator.send(TwoTimes(4)).unwrap());
/// ```
#[derive(Clone)]
pub struct DefaultMediator {
    request_handlers: SharedHandler<RequestHandlerWrapper>,
    event_handlers: SharedHandler<Vec<EventHandlerWrapper>>,
}

impl DefaultMediator {
    /// Gets a [DefaultMediator] builder.
    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl Mediator for DefaultMediator {
    fn send<Req, Res>(&mut self, req: Req) -> crate::Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
    {
        // Clone the handler out so the map is not locked while it runs.
        let handler = self
            .request_handlers
            .lock()?
            .get(&TypeId::of::<Req>())
            .cloned();

        match handler {
            Some(handler) => handler.handle(req),
            None => Err(Error::HandlerNotFound(type_name::<Req>())),
        }
    }

    fn publish<E>(&mut self, event: E) -> crate::Result<()>
    where
        E: Event + Send + 'static,
    {
        let handlers = self
            .event_handlers
            .lock()?
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        for handler in handlers {
            handler.handle(event.clone())?;
        }

        Ok(())
    }
}

/// A builder for the [DefaultMediator].
pub struct Builder {
    inner: DefaultMediator,
}

impl Builder {
    /// Constructs a new `Builder`.
    pub fn new() -> Self {
        Builder {
            inner: DefaultMediator {
                request_handlers: SharedHandler::default(),
                event_handlers: SharedHandler::default(),
            },
        }
    }

    /// Registers a request handler, replacing any previous one for `Req`.
    pub fn add_handler<Req, Res, H>(self, handler: H) -> Self
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
        H: RequestHandler<Req, Res> + Send + 'static,
    {
        self.inner
            .request_handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<Req>(), RequestHandlerWrapper::new(handler));
        self
    }

    /// Register a request handler using a copy of the mediator.
    pub fn add_handler_deferred<Req, Res, H, F>(self, f: F) -> Self
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
        H: RequestHandler<Req, Res> + Send + 'static,
        F: Fn(DefaultMediator) -> H,
    {
        let handler = f(self.inner.clone());
        self.add_handler(handler)
    }

    /// Registers an event handler.
    pub fn subscribe<E, H>(self, handler: H) -> Self
    where
        E: Event + Send + 'static,
        H: EventHandler<E> + Send + 'static,
    {
        self.inner
            .event_handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(EventHandlerWrapper::new(handler));
        self
    }

    /// Registers an event handler from a function.
    pub fn subscribe_fn<E, F>(self, handler: F) -> Self
    where
        E: Event + Send + 'static,
        F: FnMut(E) + Send + 'static,
    {
        self.subscribe::<E, F>(handler)
    }

    /// Builds the `DefaultMediator`.
    pub fn build(self) -> DefaultMediator {
        self.inner
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}
