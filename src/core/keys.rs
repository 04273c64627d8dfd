// Stage keys carried on elements as a data attribute, so an element found
// again (observer entry, page query) maps back to its key without a scan.

/// Attribute value for `key`.
#[inline]
pub fn encode_key(key: usize) -> String {
    key.to_string()
}

/// Key stored in an attribute value, if it is one this stage handed out.
/// `known` is the number of keys issued so far.
pub fn decode_key(raw: Option<&str>, known: usize) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|&k| k < known)
}
