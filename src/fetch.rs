//! Copyright © 2025-2026 Joran Velde. All Rights Reserved.
//!
//! This file is part of Senti.
//! The Senti project belongs to the Meridian Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Senti Fetch Module
//!
//! Pulls public posts for a hashtag from a Mastodon instance. The query is
//! reduced to a single tag (leading `#` stripped, first whitespace-separated
//! token), and the instance's public tag timeline is paged until exactly the
//! requested number of posts is collected or the timeline runs dry.
//!
//! ## Pagination
//!
//! Each page requests `min(page_size, remaining, 40)` statuses; the instance
//! caps pages at 40. Follow-up pages pass the last status id as `max_id`. A
//! short page means the timeline is exhausted and the batch is returned as
//! is, possibly smaller than requested.
//!
//! ## Content Cleanup
//!
//! Status content arrives as HTML. Tags are replaced by spaces, the common
//! entities are decoded, and whitespace is collapsed, leaving plain text for
//! the scorer.

use std::time::Duration;

use serde::Deserialize;

use crate::config::SentiFetchConfig;
use crate::errors::{Result, SentiError};
use crate::post::{SentiPost, SentiPostBatch};

/// Hard page cap enforced by Mastodon's public timeline API.
const MASTODON_PAGE_CAP: usize = 40;

/// One status as returned by `/api/v1/timelines/tag/{tag}`.
///
/// Only the fields the pipeline needs; everything else is ignored.
#[derive(Clone, Debug, Deserialize)]
struct MastodonStatus {
    id: String,
    content: String,
    #[serde(default)]
    url: Option<String>,
    uri: String,
}

/// Client for a Mastodon instance's public tag timeline.
#[derive(Debug)]
pub struct SentiFetcher {
    client: reqwest::Client,
    instance: String,
    page_size: usize,
}

impl SentiFetcher {
    /// Builds the fetcher from configuration.
    pub fn new(config: &SentiFetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            instance: config.instance.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    /// Fetches up to `count` posts for the query's tag, in timeline order.
    ///
    /// `count == 0` returns an empty batch without touching the network. An
    /// empty query is a validation error.
    pub async fn fetch(&self, query: &str, count: usize) -> Result<SentiPostBatch> {
        let tag = query_to_tag(query)
            .ok_or_else(|| SentiError::validation("query must contain a tag or word"))?;
        if count == 0 {
            return Ok(SentiPostBatch::new());
        }

        log::info!("fetching {} posts for #{} from {}", count, tag, self.instance);

        let mut posts = SentiPostBatch::with_capacity(count);
        let mut max_id: Option<String> = None;
        while posts.len() < count {
            let remaining = count - posts.len();
            let limit = self.page_size.min(remaining).min(MASTODON_PAGE_CAP).max(1);
            let statuses = self.fetch_page(&tag, limit, max_id.as_deref()).await?;
            if statuses.is_empty() {
                break;
            }
            let short_page = statuses.len() < limit;
            max_id = statuses.last().map(|status| status.id.clone());

            for status in statuses {
                let text = clean_content(&status.content);
                let url = status.url.unwrap_or(status.uri);
                posts.push(SentiPost::new(text, url));
                if posts.len() == count {
                    break;
                }
            }
            if short_page {
                log::debug!("timeline for #{} exhausted at {} posts", tag, posts.len());
                break;
            }
        }

        log::info!("fetched {} posts for #{}", posts.len(), tag);
        Ok(posts)
    }

    async fn fetch_page(
        &self,
        tag: &str,
        limit: usize,
        max_id: Option<&str>,
    ) -> Result<Vec<MastodonStatus>> {
        let mut url = format!(
            "{}/api/v1/timelines/tag/{}?limit={}",
            self.instance,
            urlencoding::encode(tag),
            limit
        );
        if let Some(id) = max_id {
            url.push_str("&max_id=");
            url.push_str(id);
        }

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SentiError::fetch(format!(
                "instance returned status {} for #{}",
                status, tag
            )));
        }
        Ok(response.json().await?)
    }
}

/// Reduces a raw query to a single tag: trim, strip leading `#`, take the
/// first whitespace-separated token. Returns `None` for an empty query.
pub fn query_to_tag(query: &str) -> Option<String> {
    query
        .trim()
        .trim_start_matches('#')
        .split_whitespace()
        .next()
        .map(str::to_string)
}

/// Turns status HTML into plain whitespace-normalized text.
fn clean_content(html: &str) -> String {
    collapse_whitespace(&decode_entities(&strip_tags(html)))
}

/// Replaces every HTML tag with a single space so adjacent blocks do not
/// fuse into one word.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Decodes the entities Mastodon emits in status content. `&amp;` decodes
/// last so doubly-escaped text stays escaped once.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
