//! HTTP client for the POS server routes.
//!
//! The original page drove these endpoints through full-page navigation; here
//! each navigation is re-expressed as an explicit request while preserving the
//! exact URL the server sees (`/update_status/{id}/{status}`, the filtered
//! index URL, the `/add` form post, and the delete routes).

use anyhow::{Context, Result};
use reqwest::Client;
use shared::domain::{CustomerId, MenuItemId, OrderId, OrderType, PaymentMethod};
use tracing::debug;
use url::Url;

/// Compose the status-update navigation path.
///
/// An empty status means the select is still on its placeholder entry, so no
/// navigation happens at all. Anything else is passed through untouched; the
/// server validates the value.
pub fn status_update_path(order_id: OrderId, status: &str) -> Option<String> {
    if status.is_empty() {
        return None;
    }
    Some(format!("/update_status/{}/{status}", order_id.0))
}

/// Rewrite the current page URL with the two order-list filters.
///
/// Only `status` and `order_type` are set/overwritten; every other query
/// parameter is carried over unchanged.
pub fn with_order_filters(current: &Url, status: &str, order_type: &str) -> Url {
    let retained: Vec<(String, String)> = current
        .query_pairs()
        .filter(|(key, _)| key != "status" && key != "order_type")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = current.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("status", status);
        pairs.append_pair("order_type", order_type);
    }
    url
}

/// The order form as the `/add` route consumes it.
#[derive(Debug, Clone)]
pub struct OrderFormSubmission {
    /// Either the `new` sentinel or an existing customer id rendered as text,
    /// matching the select's option values.
    pub customer_choice: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub order_type: OrderType,
    pub table_number: Option<String>,
    pub discount_percent: f64,
    /// Checked menu items, in the order they were checked.
    pub items: Vec<MenuItemId>,
}

impl OrderFormSubmission {
    fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("customer_id", self.customer_choice.clone()),
            ("name", self.name.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.clone()),
            ("address", self.address.clone()),
            ("payment_method", self.payment_method.to_string()),
            ("order_type", self.order_type.to_string()),
            ("discount", self.discount_percent.to_string()),
        ];
        if let Some(table_number) = &self.table_number {
            pairs.push(("table_number", table_number.clone()));
        }
        for item in &self.items {
            pairs.push(("items", item.0.to_string()));
        }
        pairs
    }
}

pub struct PosClient {
    http: Client,
    base_url: Url,
}

impl PosClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Drive the `/update_status/{id}/{status}` route. Returns the path that
    /// was navigated to, or `None` when the status was empty and nothing was
    /// sent.
    pub async fn update_status(&self, order_id: OrderId, status: &str) -> Result<Option<String>> {
        let Some(path) = status_update_path(order_id, status) else {
            return Ok(None);
        };
        let url = self
            .base_url
            .join(&path)
            .context("composing status update url")?;
        debug!(%url, "navigating status update");
        self.http.get(url).send().await?.error_for_status()?;
        Ok(Some(path))
    }

    /// Reload the orders page with both filter query parameters applied.
    /// Returns the URL that was navigated to.
    pub async fn apply_order_filters(
        &self,
        current: &Url,
        status: &str,
        order_type: &str,
    ) -> Result<Url> {
        let url = with_order_filters(current, status, order_type);
        debug!(%url, "navigating filtered orders page");
        self.http.get(url.clone()).send().await?.error_for_status()?;
        Ok(url)
    }

    /// Submit the order form to `/add`, form-encoded with the repeated
    /// `items` key the server reads via `getlist`.
    pub async fn place_order(&self, form: &OrderFormSubmission) -> Result<()> {
        let url = self.base_url.join("/add").context("composing add url")?;
        debug!(%url, items = form.items.len(), "submitting order form");
        self.http
            .post(url)
            .form(&form.form_pairs())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_order(&self, order_id: OrderId) -> Result<()> {
        let url = self
            .base_url
            .join(&format!("/delete/{}", order_id.0))
            .context("composing delete url")?;
        debug!(%url, "navigating order delete");
        self.http.get(url).send().await?.error_for_status()?;
        Ok(())
    }

    pub async fn delete_customer(&self, customer_id: CustomerId) -> Result<()> {
        let url = self
            .base_url
            .join(&format!("/delete_customer/{}", customer_id.0))
            .context("composing delete customer url")?;
        debug!(%url, "navigating customer delete");
        self.http.get(url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
