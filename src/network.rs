use std::time::Duration;

use reqwest::{header, RequestBuilder, Response};

pub const BASE_DOMAIN: &str = "gold-usergeneratedcontent.net";

const SCRIPT_HOST_TIMEOUT: Duration = Duration::from_secs(3);
const SCRIPT_HOST_RETRIES: u32 = 10;

/// Issues a GET against the gallery service. The `ltn.` script host drops
/// slow connections, so requests to it run with a short timeout and are
/// retried on timeout; everything else fails on the first error.
pub async fn get(url: &str) -> reqwest::Result<Response> {
    let client = reqwest::Client::builder().zstd(true).build()?;

    let is_script_host = url.starts_with("https://ltn.");

    let build = |client: &reqwest::Client| -> RequestBuilder {
        let mut request = client
            .get(url)
            .header(header::REFERER, "https://hitomi.la");

        if is_script_host {
            request = request.timeout(SCRIPT_HOST_TIMEOUT);
        }

        request
    };

    let mut retry = 0;

    loop {
        match build(&client).send().await {
            Ok(resp) => break Ok(resp),
            Err(err) if is_script_host && err.is_timeout() && retry < SCRIPT_HOST_RETRIES => {
                retry += 1;
                tracing::debug!("script host timed out, retry {retry}");
            }
            Err(err) => break Err(err),
        }
    }
}
