use serde::{Deserialize, Serialize};

/// Issuing network, detected from the leading digits for badge display only.
/// Never gates validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    Visa,
    Mastercard,
}

impl CardNetwork {
    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
        }
    }

    /// Prefix rules: `4` is Visa, `51`-`55` and `22`-`27` are Mastercard.
    /// Anything else shows no badge. Space separators are ignored.
    pub fn detect(number: &str) -> Option<CardNetwork> {
        let mut digits = number.chars().filter(|c| !c.is_whitespace());
        let first = digits.next()?;
        match first {
            '4' => Some(CardNetwork::Visa),
            '5' => match digits.next()? {
                '1'..='5' => Some(CardNetwork::Mastercard),
                _ => None,
            },
            '2' => match digits.next()? {
                '2'..='7' => Some(CardNetwork::Mastercard),
                _ => None,
            },
            _ => None,
        }
    }
}
