// Build-time settings. Every value can be overridden by exporting the
// matching BST_* variable before running `trunk build`.

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    match option_env!("BST_SITE_URL") {
        Some(url) => url,
        None => "http://localhost:8080",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    match option_env!("BST_SITE_URL") {
        Some(url) => url,
        None => "https://bstcrew.com",
    }
}

pub fn get_form_endpoint() -> &'static str {
    match option_env!("BST_FORM_ENDPOINT") {
        Some(endpoint) => endpoint,
        None => "https://formsubmit.co/ajax/17d1662df807001db96cb24a3b05473f",
    }
}

/// hCaptcha site key. `None` disables the contact form submit button.
pub fn get_hcaptcha_site_key() -> Option<&'static str> {
    option_env!("BST_HCAPTCHA_SITE_KEY").filter(|key| !key.trim().is_empty())
}

pub fn get_instagram_url() -> &'static str {
    match option_env!("BST_INSTAGRAM_URL") {
        Some(url) => url,
        None => "https://instagram.com/bstcrew",
    }
}

pub fn get_contact_email() -> &'static str {
    match option_env!("BST_CONTACT_EMAIL") {
        Some(email) => email,
        None => "dalpozzo92@gmail.com",
    }
}

/// Joins a path onto the site URL without doubling slashes.
pub fn site_link(path: &str) -> String {
    format!(
        "{}/{}",
        get_site_url().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_link_joins_single_slash() {
        let base = get_site_url().trim_end_matches('/');
        assert_eq!(site_link("/chi-sono"), format!("{}/chi-sono", base));
        assert_eq!(site_link("faq"), format!("{}/faq", base));
        assert_eq!(site_link("/"), format!("{}/", base));
    }
}
