//! Helpers shared by the handler and view tests.
#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{
    assert_form_submit_button, assert_hx_endpoint, assert_required_input, form_error_messages,
    must_get_form, select_options,
};
pub(crate) use html::{assert_valid_html, element_texts, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_hx_redirect, assert_status_ok, response_json};
