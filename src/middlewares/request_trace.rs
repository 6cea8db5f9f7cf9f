/*!
 * 请求追踪中间件
 *
 * 为每个请求记录方法、路径、状态码与耗时。4xx 以 info 级别记录，5xx 以 warn 级别记录。
 *
 * ```rust,ignore
 * App::new()
 *     .wrap(RequestTrace)
 *     .configure(routes::configure_courses_routes)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, time::Instant};
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            let started = Instant::now();
            let method = req.method().clone();
            let path = req.path().to_string();

            let res = srv.call(req).await?;
            let status = res.status();
            let elapsed_ms = started.elapsed().as_millis();

            if status.is_server_error() {
                warn!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
            } else if status.is_client_error() {
                info!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
            } else {
                debug!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
            }

            Ok(res)
        })
    }
}
