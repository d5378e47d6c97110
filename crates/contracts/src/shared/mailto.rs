//! `mailto:` link composition for the contact form.

use crate::domain::contact::ContactMessage;

/// Body text of the composed mail.
pub fn mail_body(message: &ContactMessage) -> String {
    let message = message.trimmed();
    format!(
        "Name: {}\nEmail: {}\n\n{}",
        message.name, message.email, message.message
    )
}

/// `mailto:` URI with a percent-encoded subject and body.
pub fn compose_mailto(recipient: &str, subject: &str, message: &ContactMessage) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient.trim(),
        urlencoding::encode(subject),
        urlencoding::encode(&mail_body(message))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_body() {
        let msg = ContactMessage::new(" Ann ", "a@b.co", "Hello there\nBye ");
        assert_eq!(mail_body(&msg), "Name: Ann\nEmail: a@b.co\n\nHello there\nBye");
    }

    #[test]
    fn test_compose_mailto_encodes_subject_and_body() {
        let msg = ContactMessage::new("Ann Lee", "a@b.co", "Hi & bye?");
        let uri = compose_mailto("hello@example.com", "Portfolio contact", &msg);
        assert_eq!(
            uri,
            "mailto:hello@example.com?subject=Portfolio%20contact\
             &body=Name%3A%20Ann%20Lee%0AEmail%3A%20a%40b.co%0A%0AHi%20%26%20bye%3F"
        );
    }
}
