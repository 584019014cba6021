#![allow(missing_docs)]

pub(crate) mod dataset;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use dataset::{RISK_CSV, test_dashboard_state, test_dataset};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment, select_texts};
pub(crate) use http::{assert_content_type, assert_status_ok};
