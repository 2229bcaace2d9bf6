#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

pub const HIGHLIGHT: &str = "mohd_pdf_enhance.fedex_waybills.highlight_sale_order";
pub const DUMMY: &str = "mohd_pdf_enhance.dummy";
pub const RANDOM: &str = "mohd_pdf_enhance.filters.random_status";

/// Write a PDF with one line of Helvetica text per page
pub fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Options block for the sale-order filter used across tests
pub fn highlight_options() -> serde_json::Value {
    serde_json::json!({
        "regex-fedex": "FedEx",
        "regex-sale_order": r"Order:\s*(S\d{5})",
        "result-font-face": "Helvetica-Bold",
        "result-font-size": 28,
        "result-text-rotation": 90,
        "result-text-x": 400,
        "result-text-y": -60,
    })
}

/// A scratch directory holding an input PDF and a settings file
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub input: PathBuf,
    pub settings: PathBuf,
}

impl Fixture {
    pub fn new(pages: &[&str], settings: serde_json::Value) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("waybill.pdf");
        let settings_path = dir.path().join("settings.json");
        write_pdf(&input, pages);
        fs::write(&settings_path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        Self {
            dir,
            input,
            settings: settings_path,
        }
    }

    pub fn debug_file(&self) -> PathBuf {
        self.dir.path().join("temp.pdf")
    }
}
