//! Highlight the sale order printed on FedEx waybills.
//!
//! The filter looks for the carrier marker on any page. Once found, the sale
//! order is read from the first page only and rendered as an overlay on
//! every page of the document.

use std::path::Path;

use lopdf::Document;
use regex::Regex;
use serde_json::Value;

use crate::config::defaults::{
    DEFAULT_FONT_FACE, DEFAULT_FONT_SIZE, DEFAULT_TEXT_ROTATION, DEFAULT_TEXT_X, DEFAULT_TEXT_Y,
};
use crate::error::{ConfigError, FilterError};
use crate::pdf::{self, text, OverlayStyle};

use super::options::FilterOptions;
use super::Filter;

pub const IDENTIFIER: &str = "mohd_pdf_enhance.fedex_waybills.highlight_sale_order";

/// Resource name of the overlay form; its presence marks a processed document
pub const OVERLAY_NAME: &str = "MohdSaleOrder";

pub struct HighlightSaleOrder {
    carrier_pattern: Regex,
    sale_order_pattern: Regex,
    style: OverlayStyle,
}

impl HighlightSaleOrder {
    /// Options:
    /// - `regex-fedex`: carrier marker searched on every page
    /// - `regex-sale_order`: sale order pattern, first capture group is used
    /// - `result-font-face`, `result-font-size`, `result-text-rotation`,
    ///   `result-text-x`, `result-text-y`: overlay placement
    pub fn from_options(options: &Value) -> Result<Self, ConfigError> {
        let options = FilterOptions::new(IDENTIFIER, options)?;

        let carrier_pattern = compile(options.required_str("regex-fedex")?, "regex-fedex")?;
        let sale_order_pattern =
            compile(options.required_str("regex-sale_order")?, "regex-sale_order")?;
        if sale_order_pattern.captures_len() < 2 {
            return Err(ConfigError::invalid_options(
                IDENTIFIER,
                "\"regex-sale_order\" needs a capture group for the sale order",
            ));
        }

        let font_face = options.str_or("result-font-face", DEFAULT_FONT_FACE)?;
        let font = pdf::builtin_font(font_face).ok_or_else(|| {
            ConfigError::invalid_options(
                IDENTIFIER,
                format!("\"{}\" is not a standard PDF font", font_face),
            )
        })?;

        let style = OverlayStyle {
            font,
            font_size: options.f32_or("result-font-size", DEFAULT_FONT_SIZE)?,
            rotation: options.f32_or("result-text-rotation", DEFAULT_TEXT_ROTATION)?,
            x: options.f32_or("result-text-x", DEFAULT_TEXT_X)?,
            y: options.f32_or("result-text-y", DEFAULT_TEXT_Y)?,
        };

        Ok(Self {
            carrier_pattern,
            sale_order_pattern,
            style,
        })
    }

    /// Find the sale order of a waybill.
    ///
    /// Stops at the first page matching the carrier marker; only the first
    /// page is searched for the sale order, even when the marker was found
    /// on a later page.
    pub fn find_sale_order(&self, doc: &Document) -> Result<Option<String>, lopdf::Error> {
        let pages = text::page_numbers(doc);
        let Some(&first_page) = pages.first() else {
            return Ok(None);
        };

        for page in pages {
            if !self.carrier_pattern.is_match(&text::page_text(doc, page)?) {
                continue;
            }
            log::debug!("Carrier marker found on page {}", page);
            let content = text::page_text(doc, first_page)?;
            let sale_order = self
                .sale_order_pattern
                .captures(&content)
                .and_then(|captures| captures.get(1))
                .map(|group| group.as_str().to_string())
                .filter(|sale_order| !sale_order.is_empty());
            return Ok(sale_order);
        }
        Ok(None)
    }
}

fn compile(pattern: &str, key: &'static str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidRegex {
        filter: IDENTIFIER.to_string(),
        key,
        source,
    })
}

impl Filter for HighlightSaleOrder {
    fn name(&self) -> &str {
        IDENTIFIER
    }

    fn process(&mut self, filename: &Path, destination: &Path) -> Result<bool, FilterError> {
        let mut doc = Document::load(filename)?;

        if pdf::has_stamp(&doc, OVERLAY_NAME) {
            log::debug!("Sale order already highlighted, no processing");
            return Ok(false);
        }

        let Some(sale_order) = self.find_sale_order(&doc)? else {
            log::debug!("No sale order was found, no processing");
            return Ok(false);
        };

        log::info!("Highlight sale order {}", sale_order);
        let overlay = pdf::render_text_overlay(&sale_order, &self.style);
        let pages = pdf::stamp_pages(&mut doc, &overlay, OVERLAY_NAME)?;
        log::debug!("Sale order overlay merged onto {} page(s)", pages);

        pdf::save_compressed(&mut doc, destination)?;
        Ok(true)
    }
}
