use crate::config::ContactNumber;
use crate::error::Result;
use url::Url;

/// Base of the WhatsApp click-to-chat endpoint. The recipient goes into the
/// path in bare international format; a `+` here breaks the link.
const MESSAGING_BASE: &str = "https://wa.me/";

/// Builds the messaging deep-link `https://wa.me/<digits>?text=<message>`,
/// with the message encoded as a query value. Opening it is the host
/// environment's job.
pub fn messaging_link(contact: &ContactNumber, message: &str) -> Result<Url> {
    let mut url = Url::parse(MESSAGING_BASE)?;
    url.set_path(contact.digits());
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}

/// Builds the dial string `tel:+<digits>`. Unlike the messaging link,
/// dialing wants the `+` prefix.
pub fn dial_link(contact: &ContactNumber) -> String {
    format!("tel:+{}", contact.digits())
}
