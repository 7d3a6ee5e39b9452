//! HTML pages rendered with Handlebars. Every interpolated value is
//! HTML-escaped since session values come from the browser and the
//! provider.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Page {
    AuthSuccess,
    CandidateForm,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const AUTH_SUCCESS_PAGE: &str = r#"
<h3>Authorization Successful!</h3>
<p>Email: {{email}}</p>
<p>Access Token: {{access_token}}</p>
<p><a href="/candidate-availability">Propose an interview time</a></p>
"#;

const CANDIDATE_FORM_PAGE: &str = r#"
<form method="post">
    <label>Select your available time slot:</label>
    <input type="datetime-local" name="time" value="{{candidate_time}}">
    <label>Your email (optional):</label>
    <input type="email" name="email" value="{{candidate_email}}">
    <input type="submit" value="Submit">
</form>
"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Page::AuthSuccess.to_string(), AUTH_SUCCESS_PAGE)
        .expect("Failed to register template");
    registry
        .register_template_string(&Page::CandidateForm.to_string(), CANDIDATE_FORM_PAGE)
        .expect("Failed to register template");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escapes_values() {
        let html = templates()
            .render(
                &Page::AuthSuccess.to_string(),
                &json!({"email": "<script>x</script>", "access_token": "tok"}),
            )
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_strict_mode_requires_fields() {
        let result = templates().render(&Page::CandidateForm.to_string(), &json!({}));
        assert!(result.is_err());
    }
}
