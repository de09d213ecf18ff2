//! Online Hanyu dictionary scraper.
//!
//! The character is percent-encoded into a query-string, the page is fetched
//! and the radical is read from the element whose id is `radical`:
//!
//! ```html
//! <li id="radical"><label>部首</label><span>丨</span></li>
//! ```
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{CONNECTION, REFERER, USER_AGENT};
use scraper::{Html, Selector};

use super::{LookupError, RadicalLookup};
use crate::error::Error;

/// `{}` is replaced by the percent-encoded character.
pub const DEFAULT_URL_TEMPLATE: &str = "http://hanyu.baidu.com/zici/s?ptype=zici&wd={}";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// the service filters out requests that do not look like they come from a browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

pub struct HanyuLookup {
    client: Client,
    url_template: String,
}

impl HanyuLookup {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        Self::with_template(DEFAULT_URL_TEMPLATE, timeout)
    }

    /// Use another endpoint. `url_template` has to contain a `{}` placeholder.
    pub fn with_template(url_template: &str, timeout: Duration) -> Result<Self, Error> {
        if !url_template.contains("{}") {
            return Err(Error::Custom(format!(
                "url template {url_template:?} has no {{}} placeholder"
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url_template: url_template.to_string(),
        })
    }

    /// Forge the request url of `character`.
    pub fn url(&self, character: char) -> String {
        let mut buf = [0u8; 4];
        let encoded: String =
            url::form_urlencoded::byte_serialize(character.encode_utf8(&mut buf).as_bytes())
                .collect();
        self.url_template.replace("{}", &encoded)
    }

    /// Single GET, no retry.
    fn fetch(&self, url: &str) -> Result<String, LookupError> {
        let body = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(CONNECTION, "keep-alive")
            .header(REFERER, url)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(body)
    }
}

impl RadicalLookup for HanyuLookup {
    fn lookup(&self, character: char) -> Result<String, LookupError> {
        let url = self.url(character);
        debug!("fetching {}", url);
        let html = self.fetch(&url)?;
        parse_radical(&html)
    }
}

fn selector(selectors: &str) -> Result<Selector, LookupError> {
    Selector::parse(selectors).map_err(|e| LookupError::Selector(format!("{:?}", e)))
}

/// Extract the radical from a dictionary page.
///
/// Takes the first non-blank text of the first `span` under `#radical`.
/// The other texts of `#radical` are labels, never the radical.
pub(crate) fn parse_radical(html: &str) -> Result<String, LookupError> {
    let radical = selector("#radical")?;
    let span = selector("span")?;

    let document = Html::parse_document(html);
    let element = document
        .select(&radical)
        .next()
        .ok_or(LookupError::MissingRadical)?;
    let holder = element
        .select(&span)
        .next()
        .ok_or(LookupError::MissingRadical)?;

    holder
        .text()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(LookupError::MissingRadical)
}
