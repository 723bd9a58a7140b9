/// Translation seam. Keys are the English source strings; named parameters are
/// written as `{{name}}` inside the key.
pub trait Translator {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Returns the key itself with its `{{name}}` placeholders filled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(key, params)
    }
}

/// Replaces each `{{name}}` with its value. Unknown placeholders are kept as-is.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after[..end].trim();
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_named_parameters() {
        let out = Passthrough.t("Top {{limit}} {{type}} rates", &[("limit", "5"), ("type", "bytes")]);
        assert_eq!(out, "Top 5 bytes rates");
    }

    #[test]
    fn keeps_unknown_and_unterminated_placeholders() {
        assert_eq!(interpolate("a {{missing}} b", &[]), "a {{missing}} b");
        assert_eq!(interpolate("a {{open", &[("open", "x")]), "a {{open");
        assert_eq!(interpolate("no params", &[("x", "y")]), "no params");
    }
}
