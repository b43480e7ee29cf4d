use flagship::{ClientConfig, Context, RequestOptions};

pub fn main() {
    env_logger::init();

    let environment_id = std::env::var("FLAGSHIP_ENVIRONMENT_ID").unwrap();
    let visitor_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "test-visitor".to_owned());

    let http = reqwest::blocking::Client::new();
    let mut config = ClientConfig::from_environment_id(environment_id);
    // Assign without triggering, activation is sent explicitly below.
    config.request_options(
        RequestOptions::default()
            .disable_trigger_hit()
            .enable_mode_simple(),
    );
    let client = config.to_client(&http).unwrap();

    let mut context = Context::new();
    context.add("plan", "premium").add("country", "FR");

    let response = client
        .request_all_campaigns(&visitor_id, &context)
        .unwrap();
    println!("Status: {}", response.status());
    println!("Campaigns: {}", response.text().unwrap());

    if let (Ok(variation_group_id), Ok(variation_id)) = (
        std::env::var("FLAGSHIP_VARIATION_GROUP_ID"),
        std::env::var("FLAGSHIP_VARIATION_ID"),
    ) {
        let response = client
            .request_campaign_activation(&visitor_id, &variation_group_id, &variation_id)
            .unwrap();
        println!("Activation status: {}", response.status());
    }
}
