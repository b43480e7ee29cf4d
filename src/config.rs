use crate::{Client, HttpSender, RequestOptions, Result};

/// Configuration for [`Client`].
pub struct ClientConfig {
    pub(crate) environment_id: String,
    pub(crate) base_url: String,
    pub(crate) request_options: RequestOptions,
}

impl ClientConfig {
    /// Create a default Flagship configuration using the specified environment ID.
    ///
    /// ```
    /// # use flagship::ClientConfig;
    /// ClientConfig::from_environment_id("my_environment_id");
    /// ```
    pub fn from_environment_id(environment_id: impl Into<String>) -> Self {
        ClientConfig {
            environment_id: environment_id.into(),
            base_url: ClientConfig::DEFAULT_BASE_URL.to_owned(),
            request_options: RequestOptions::default(),
        }
    }

    /// Default base URL for Decision API calls.
    pub const DEFAULT_BASE_URL: &'static str = "https://decision-api.flagship.io/v1";

    /// Override base URL for API calls. Clients should use the default setting in most cases.
    pub fn base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request parameters the client starts with.
    ///
    /// ```
    /// # use flagship::{ClientConfig, RequestOptions};
    /// let mut config = ClientConfig::from_environment_id("my_environment_id");
    /// config.request_options(RequestOptions::default().enable_mode_full());
    /// ```
    pub fn request_options(&mut self, request_options: RequestOptions) -> &mut Self {
        self.request_options = request_options;
        self
    }

    /// Create a new [`Client`] sending requests through `sender`.
    ///
    /// Fails if the environment ID is empty or the base URL is not a valid HTTP base.
    ///
    /// ```
    /// # use flagship::ClientConfig;
    /// let http = reqwest::blocking::Client::new();
    /// let client = ClientConfig::from_environment_id("my_environment_id")
    ///     .to_client(&http)
    ///     .unwrap();
    /// ```
    pub fn to_client<S: HttpSender>(self, sender: &S) -> Result<Client<'_, S>> {
        Client::from_config(self, sender)
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;
    use crate::{Error, Mode, RequestOptions};

    struct NoSender;

    impl crate::HttpSender for NoSender {
        type Response = ();
        type Error = ();

        fn send<B: serde::Serialize + ?Sized>(
            &self,
            _method: reqwest::Method,
            _url: reqwest::Url,
            _body: &B,
        ) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::from_environment_id("env");
        assert_eq!(config.base_url, "https://decision-api.flagship.io/v1");
        assert_eq!(config.request_options, RequestOptions::default());
    }

    #[test]
    fn client_starts_with_configured_request_options() {
        let mut config = ClientConfig::from_environment_id("env");
        config.request_options(RequestOptions::new().enable_mode_simple());

        let client = config.to_client(&NoSender).unwrap();
        assert_eq!(client.request_parameters().get_mode(), Mode::Simple);
    }

    #[test]
    fn rejects_unparsable_base_url() {
        let mut config = ClientConfig::from_environment_id("env");
        config.base_url("not a url");

        assert_eq!(
            config.to_client(&NoSender).err(),
            Some(Error::InvalidBaseUrl(url::ParseError::RelativeUrlWithoutBase))
        );
    }

    #[test]
    fn rejects_base_url_without_path() {
        let mut config = ClientConfig::from_environment_id("env");
        config.base_url("mailto:someone@example.com");

        assert_eq!(
            config.to_client(&NoSender).err(),
            Some(Error::BaseUrlCannotBeABase(
                "mailto:someone@example.com".to_owned()
            ))
        );
    }

    #[test]
    fn rejects_empty_environment_id() {
        let config = ClientConfig::from_environment_id("");
        assert_eq!(
            config.to_client(&NoSender).err(),
            Some(Error::EmptyEnvironmentId)
        );
    }
}
