//! Normalisation helpers applied to answers and used to derive props.

use cruet::case::kebab::to_kebab_case;

/// Lowercases `value` and collapses every run of non-alphanumerics into `-`.
pub fn kebab(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_dash = false;
    for c in value.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Strips one leading and one trailing slash from a folder path.
pub fn folder_name_filter(folder: &str) -> String {
    let folder = folder.strip_prefix('/').unwrap_or(folder);
    folder.strip_suffix('/').unwrap_or(folder).to_string()
}

/// Ensures a single leading slash and no trailing slash.
pub fn root_url_filter(url: &str) -> String {
    let url = url.strip_suffix('/').unwrap_or(url);
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// `appName` becomes `app-name`.
pub fn field_name_to_cli_arg(name: &str) -> String {
    to_kebab_case(name)
}

/// `21-526EZ` becomes `FORM_21_526EZ`.
pub fn generate_form_id_const(form_number: &str) -> String {
    let id = form_number.replace('-', "_");
    if id.starts_with("FORM_") {
        id
    } else {
        format!("FORM_{id}")
    }
}

/// `21-526EZ` becomes `21_526ez`.
pub fn generate_tracking_prefix(form_number: &str) -> String {
    form_number.to_lowercase().replace('-', "_")
}

/// Relative hop from a nested application folder back to `src/applications`.
pub fn calculate_sub_folder(folder_name: &str) -> String {
    let depth = folder_name.matches('/').count();
    if depth == 0 {
        return String::new();
    }
    format!("{}/", vec![".."; depth].join("/"))
}
