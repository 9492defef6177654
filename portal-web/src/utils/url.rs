//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL.
/// Reads directly from window.location.search, so it works even before the
/// router's query map is initialized.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    let query_string = search.strip_prefix('?').unwrap_or(&search);

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((param_key, param_value)) if param_key == key => {
                return Some(
                    urlencoding::decode(param_value)
                        .unwrap_or_else(|_| param_value.into())
                        .into_owned(),
                );
            }
            // Parameter present with no value (just the key)
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}
