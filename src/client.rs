use reqwest::{Method, Url};
use serde::Serialize;

use crate::{
    sender::SendResult, ClientConfig, Context, Error, HttpSender, RequestOptions, Result,
};

const NAMED_PARAM_ENV_ID: &str = "%ENVIRONMENT_ID";
const NAMED_PARAM_CAMPAIGN_ID: &str = "%CAMPAIGN_ID";

// Paths are relative to the base URL.
const ACTIVATE_PATH: &str = "activate";
const ALL_CAMPAIGNS_PATH: &str = "%ENVIRONMENT_ID/campaigns";
const SINGLE_CAMPAIGN_PATH: &str = "%ENVIRONMENT_ID/campaigns/%CAMPAIGN_ID";

/// A client for the Flagship Decision API.
///
/// The client does not own an HTTP stack. It borrows an [`HttpSender`] and returns whatever the
/// sender returns, so responses and transport errors are those of the sender.
///
/// # Examples
/// ```
/// # use flagship::{Client, Context};
/// let http = reqwest::blocking::Client::new();
/// let client = Client::new("my_environment_id", &http).unwrap();
///
/// let mut context = Context::new();
/// context.add("plan", "premium");
/// // let response = client.request_all_campaigns("visitor", &context)?;
/// ```
///
/// See <http://developers.flagship.io/api/v1/>.
pub struct Client<'a, S> {
    environment_id: String,
    base_url: Url,
    request_options: RequestOptions,
    sender: &'a S,
}

#[derive(Debug, Serialize)]
struct ActivationRequest<'a> {
    vid: &'a str,
    cid: &'a str,
    caid: &'a str,
    vaid: &'a str,
}

#[derive(Debug, Serialize)]
struct CampaignsRequest<'a> {
    visitor_id: &'a str,
    context: &'a Context,
    decision_group: Option<&'a str>,
    // Only the single campaign endpoint accepts it.
    #[serde(skip_serializing_if = "Option::is_none")]
    format_response: Option<bool>,
    trigger_hit: bool,
}

impl<'a, S: HttpSender> Client<'a, S> {
    /// Create a client for `environment_id` with default settings.
    ///
    /// Fails with [`Error::EmptyEnvironmentId`] if `environment_id` is empty.
    pub fn new(environment_id: impl Into<String>, sender: &'a S) -> Result<Self> {
        ClientConfig::from_environment_id(environment_id).to_client(sender)
    }

    pub(crate) fn from_config(config: ClientConfig, sender: &'a S) -> Result<Self> {
        if config.environment_id.is_empty() {
            return Err(Error::EmptyEnvironmentId);
        }

        let base_url = Url::parse(&config.base_url).map_err(Error::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::BaseUrlCannotBeABase(config.base_url));
        }

        log::debug!(target: "flagship",
                    environment_id = config.environment_id.as_str(),
                    base_url = base_url.as_str();
                    "created Decision API client");

        Ok(Client {
            environment_id: config.environment_id,
            base_url,
            request_options: config.request_options,
            sender,
        })
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Replace the request parameters used by subsequent requests. Previous values are dropped,
    /// not merged.
    pub fn set_request_parameters(&mut self, request_options: RequestOptions) {
        log::trace!(target: "flagship",
                    request_options:? = request_options;
                    "replacing request parameters");
        self.request_options = request_options;
    }

    pub fn request_parameters(&self) -> &RequestOptions {
        &self.request_options
    }

    /// Record that a visitor has seen a variation.
    ///
    /// Use it when campaigns are assigned with trigger hit disabled.
    ///
    /// See <http://developers.flagship.io/api/v1/#campaign-activation>.
    pub fn request_campaign_activation(
        &self,
        visitor_id: &str,
        variation_group_id: &str,
        variation_id: &str,
    ) -> SendResult<S> {
        let url = self.endpoint_url(ACTIVATE_PATH, &[]);
        let body = ActivationRequest {
            vid: visitor_id,
            cid: &self.environment_id,
            caid: variation_group_id,
            vaid: variation_id,
        };

        log::debug!(target: "flagship",
                    visitor_id,
                    variation_group_id,
                    variation_id,
                    url = url.as_str();
                    "requesting campaign activation");
        self.sender.send(Method::POST, url, &body)
    }

    /// Assign a visitor to the variations of a single campaign.
    ///
    /// See <http://developers.flagship.io/api/v1/#single-campaign>.
    pub fn request_single_campaign(
        &self,
        visitor_id: &str,
        campaign_id: &str,
        context: &Context,
    ) -> SendResult<S> {
        let url = self.endpoint_url(
            SINGLE_CAMPAIGN_PATH,
            &[
                (NAMED_PARAM_ENV_ID, self.environment_id.as_str()),
                (NAMED_PARAM_CAMPAIGN_ID, campaign_id),
            ],
        );
        let body = CampaignsRequest {
            visitor_id,
            context,
            decision_group: self.request_options.get_decision_group(),
            format_response: Some(self.request_options.is_format_response_enabled()),
            trigger_hit: self.request_options.is_trigger_hit_enabled(),
        };

        log::debug!(target: "flagship",
                    visitor_id,
                    campaign_id,
                    url = url.as_str();
                    "requesting single campaign");
        self.sender.send(Method::POST, url, &body)
    }

    /// Assign a visitor to all campaigns of the environment.
    ///
    /// See <http://developers.flagship.io/api/v1/#all-campaigns>.
    pub fn request_all_campaigns(&self, visitor_id: &str, context: &Context) -> SendResult<S> {
        let mut url = self.endpoint_url(
            ALL_CAMPAIGNS_PATH,
            &[(NAMED_PARAM_ENV_ID, self.environment_id.as_str())],
        );
        if !self.request_options.is_default_mode() {
            url.query_pairs_mut()
                .append_pair("mode", self.request_options.get_mode().as_str());
        }
        let body = CampaignsRequest {
            visitor_id,
            context,
            decision_group: self.request_options.get_decision_group(),
            format_response: None,
            trigger_hit: self.request_options.is_trigger_hit_enabled(),
        };

        log::debug!(target: "flagship",
                    visitor_id,
                    url = url.as_str();
                    "requesting all campaigns");
        self.sender.send(Method::POST, url, &body)
    }

    /// Append `path_template` to the base URL. Named parameters are substituted segment by
    /// segment and every segment is percent-encoded, so a value never spans several segments.
    fn endpoint_url(&self, path_template: &str, named_params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        // Cannot fail: `from_config` rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(
                path_template
                    .split('/')
                    .map(|segment| replace_named_parameters(segment, named_params)),
            );
        }
        url
    }
}

/// Replace every occurrence of each named parameter (key) in `source` with its value.
///
/// Substituted values are not scanned again, so a value that looks like a parameter name is kept
/// as is.
fn replace_named_parameters(source: &str, named_params: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;
    'scan: while let Some(c) = rest.chars().next() {
        for &(name, value) in named_params {
            if !name.is_empty() && rest.starts_with(name) {
                result.push_str(value);
                rest = &rest[name.len()..];
                continue 'scan;
            }
        }
        result.push(c);
        rest = &rest[c.len_utf8()..];
    }
    result
}
