use reqwest::{Method, Url};
use serde::Serialize;

/// The HTTP transport used by [`Client`](crate::Client).
///
/// The client builds the method, URL and JSON body and hands them to `send`. Whatever `send`
/// returns, response or error, is given back to the caller untouched: the client does not look at
/// status codes or response bodies.
///
/// `reqwest::blocking::Client` implements this trait. Provide your own implementation to plug in
/// another HTTP stack or a test double.
pub trait HttpSender {
    type Response;
    type Error;

    /// Send `body` serialized as JSON.
    fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Self::Response, Self::Error>;
}

impl<S: HttpSender + ?Sized> HttpSender for &S {
    type Response = S::Response;
    type Error = S::Error;

    fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Self::Response, Self::Error> {
        (**self).send(method, url, body)
    }
}

impl HttpSender for reqwest::blocking::Client {
    type Response = reqwest::blocking::Response;
    type Error = reqwest::Error;

    fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Self::Response, Self::Error> {
        self.request(method, url).json(body).send()
    }
}

/// Result of a call to [`HttpSender::send`], as returned by the client operations.
pub type SendResult<S> = Result<<S as HttpSender>::Response, <S as HttpSender>::Error>;
