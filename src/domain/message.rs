use serde::{Deserialize, Serialize};

use super::{row::format_amount, subtotal::MailingFee};

pub const MAILING_ANNOTATION: &str = "(inclusive of mailing)";

/// Seller identity embedded in every sale message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub name: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            phone: "91275288".to_string(),
            name: "Andrew".to_string(),
        }
    }
}

/// Builds the payment request pasted to buyers.
pub fn sale_message(subtotal: f64, mailing: &MailingFee, contact: &ContactDetails) -> String {
    let amount = mailing.apply(subtotal);
    let annotation = if mailing.enabled { MAILING_ANNOTATION } else { "" };
    format!(
        "Hello, thanks for the support of my sales. If the above info in the picture is correct, \
         please xfer ${amount}{annotation} to {phone}({name}) and provide me a screenshot + your \
         mailing details.",
        amount = format_amount(amount),
        phone = contact.phone,
        name = contact.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_includes_mailing_and_identity() {
        let mailing = MailingFee {
            enabled: true,
            fee: 3.50,
        };
        let message = sale_message(15.50, &mailing, &ContactDetails::default());
        assert!(message.contains("$19.00(inclusive of mailing)"));
        assert!(message.contains("to 91275288(Andrew)"));
        assert!(message.starts_with("Hello, thanks for the support of my sales."));
        assert!(message.ends_with("your mailing details."));
    }

    #[test]
    fn message_without_mailing_has_no_annotation() {
        let contact = ContactDetails {
            phone: "80001234".into(),
            name: "Robin".into(),
        };
        let message = sale_message(15.50, &MailingFee::default(), &contact);
        assert!(message.contains("xfer $15.50 to 80001234(Robin)"));
        assert!(!message.contains(MAILING_ANNOTATION));
    }
}
