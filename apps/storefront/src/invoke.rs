//! # Invoke Bridge
//!
//! Newline-delimited JSON transport between the presentation layer and the
//! command functions.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin (one request per line)                                           │
//! │  {"cmd":"select_material","materialId":"lemon"}                         │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │              Invoke::SelectMaterial ──► commands::builder               │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  stdout (one response per line)                                         │
//! │  {"ok":true,"data":{"selection":{...},"price":5500,...}}                │
//! │  {"ok":false,"error":{"code":"NOT_FOUND","message":"..."}}              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blank lines get no response. A line that does not parse gets an
//! `INVALID_REQUEST` response and the loop carries on.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::commands;
use crate::error::ApiError;
use crate::Storefront;
use crexy_core::Screen;

/// One request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Invoke {
    GetConfig,
    GetCatalog,
    #[serde(rename_all = "camelCase")]
    ListProducts {
        #[serde(default)]
        label: Option<String>,
    },
    GetView,
    Navigate {
        screen: Screen,
    },
    SetFilter {
        label: String,
    },
    GetSelection,
    #[serde(rename_all = "camelCase")]
    SelectCategory {
        category_id: String,
    },
    #[serde(rename_all = "camelCase")]
    SelectMaterial {
        material_id: String,
    },
    SetInitials {
        initials: String,
    },
    AddConfiguredToCart,
    GetCart,
    #[serde(rename_all = "camelCase")]
    AddProductToCart {
        product_id: u32,
    },
    #[serde(rename_all = "camelCase")]
    RemoveFromCart {
        cart_id: String,
    },
}

/// One response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvokeResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl From<Result<Value, ApiError>> for InvokeResponse {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => InvokeResponse {
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(error) => InvokeResponse {
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

fn to_data<T: Serialize>(response: T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(response)?)
}

impl Storefront {
    /// Runs one request against the session.
    pub fn invoke(&self, request: Invoke) -> Result<Value, ApiError> {
        let catalog = self.catalog;
        let session = &self.session;
        let config = &self.config;

        match request {
            Invoke::GetConfig => to_data(commands::config::get_config(config)),
            Invoke::GetCatalog => to_data(commands::catalog::get_catalog(catalog)),
            Invoke::ListProducts { label } => to_data(commands::catalog::list_products(
                catalog, session, config, label,
            )),
            Invoke::SetFilter { label } => {
                to_data(commands::catalog::set_filter(catalog, session, config, label))
            }
            Invoke::GetView => to_data(commands::view::get_view(session)),
            Invoke::Navigate { screen } => {
                to_data(commands::view::navigate(catalog, session, screen)?)
            }
            Invoke::GetSelection => to_data(commands::builder::get_selection(session, config)),
            Invoke::SelectCategory { category_id } => to_data(
                commands::builder::select_category(catalog, session, config, category_id)?,
            ),
            Invoke::SelectMaterial { material_id } => to_data(
                commands::builder::select_material(catalog, session, config, material_id)?,
            ),
            Invoke::SetInitials { initials } => to_data(commands::builder::set_initials(
                catalog, session, config, initials,
            )?),
            Invoke::AddConfiguredToCart => {
                to_data(commands::cart::add_configured_to_cart(session, config))
            }
            Invoke::GetCart => to_data(commands::cart::get_cart(session, config)),
            Invoke::AddProductToCart { product_id } => to_data(
                commands::cart::add_product_to_cart(catalog, session, config, product_id)?,
            ),
            Invoke::RemoveFromCart { cart_id } => {
                to_data(commands::cart::remove_from_cart(session, config, cart_id))
            }
        }
    }

    /// Parses and runs one request line. `None` for blank lines.
    pub fn handle_line(&self, line: &str) -> Option<InvokeResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let result = serde_json::from_str::<Invoke>(line)
            .map_err(|e| ApiError::invalid_request(e.to_string()))
            .and_then(|request| {
                debug!(?request, "invoke");
                self.invoke(request)
            });

        if let Err(error) = &result {
            warn!(code = ?error.code, message = %error.message, "request rejected");
        }

        Some(result.into())
    }

    /// Serves requests from `reader` until end of input, writing one
    /// response line per request to `writer`.
    ///
    /// A line that is not UTF-8 is answered with `INVALID_REQUEST` like any
    /// other malformed line. Only read/write failures end the loop.
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    warn!(error = %e, "request line is not UTF-8");
                    let error =
                        ApiError::invalid_request(format!("request is not valid UTF-8: {e}"));
                    Some(InvokeResponse::from(Err::<Value, _>(error)))
                }
            };

            if let Some(response) = response {
                serde_json::to_writer(&mut writer, &response)?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    fn storefront() -> Storefront {
        Storefront::new(ConfigState::default())
    }

    fn run(storefront: &Storefront, line: &str) -> Value {
        let response = storefront.handle_line(line).unwrap();
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_parse_requests() {
        let request: Invoke =
            serde_json::from_str(r#"{"cmd":"select_category","categoryId":"belt"}"#).unwrap();
        assert_eq!(
            request,
            Invoke::SelectCategory {
                category_id: "belt".into()
            }
        );

        let request: Invoke = serde_json::from_str(r#"{"cmd":"list_products"}"#).unwrap();
        assert_eq!(request, Invoke::ListProducts { label: None });

        let request: Invoke =
            serde_json::from_str(r#"{"cmd":"navigate","screen":"builder"}"#).unwrap();
        assert_eq!(
            request,
            Invoke::Navigate {
                screen: Screen::Builder
            }
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let storefront = storefront();
        assert!(storefront.handle_line("").is_none());
        assert!(storefront.handle_line("   ").is_none());
    }

    #[test]
    fn test_malformed_line_is_invalid_request() {
        let storefront = storefront();

        let response = storefront.handle_line("{not json").unwrap();
        assert!(!response.ok);
        assert_eq!(response.error.unwrap().code, ErrorCode::InvalidRequest);

        let response = storefront.handle_line(r#"{"cmd":"checkout"}"#).unwrap();
        assert_eq!(response.error.unwrap().code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_not_found_response_shape() {
        let storefront = storefront();
        let json = run(&storefront, r#"{"cmd":"add_product_to_cart","productId":99}"#);

        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_shopping_flow() {
        let storefront = storefront();

        let json = run(&storefront, r#"{"cmd":"add_product_to_cart","productId":1}"#);
        assert_eq!(json["ok"], true);
        let wallet_id = json["data"]["added"].as_str().unwrap().to_string();

        let json = run(&storefront, r#"{"cmd":"add_product_to_cart","productId":3}"#);
        assert_eq!(json["data"]["totals"]["total"], 22500);
        assert_eq!(json["data"]["screen"], "cart");

        let line = format!(r#"{{"cmd":"remove_from_cart","cartId":"{wallet_id}"}}"#);
        let json = run(&storefront, &line);
        assert_eq!(json["data"]["formattedTotal"], "£180.00");
        assert_eq!(json["data"]["items"][0]["name"], "Signature Tote");
    }

    #[test]
    fn test_serve_writes_one_line_per_request() {
        let storefront = storefront();
        let input = concat!(
            "{\"cmd\":\"select_category\",\"categoryId\":\"belt\"}\n",
            "\n",
            "{\"cmd\":\"select_material\",\"materialId\":\"lemon\"}\n",
            "oops\n",
            "{\"cmd\":\"get_view\"}\n",
        );

        let mut output = Vec::new();
        storefront.serve(input.as_bytes(), &mut output).unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1]["data"]["formattedPrice"], "£55.00");
        assert_eq!(lines[2]["ok"], false);
        assert_eq!(lines[3]["data"]["screen"], "home");
    }

    #[test]
    fn test_serve_answers_non_utf8_line_and_keeps_going() {
        let storefront = storefront();
        let input: &[u8] = b"{\"cmd\":\"get_view\"}\n\xff\xfe\n{\"cmd\":\"get_view\"}\n";

        let mut output = Vec::new();
        storefront.serve(input, &mut output).unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["ok"], true);
        assert_eq!(lines[1]["ok"], false);
        assert_eq!(lines[1]["error"]["code"], "INVALID_REQUEST");
        assert_eq!(lines[2]["data"]["screen"], "home");
    }
}
