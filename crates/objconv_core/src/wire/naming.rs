/// Catalogue entries whose type name does not follow the segment rule.
const TYPE_NAME_OVERRIDES: &[(&str, &str)] = &[("oauth", "Connect::OAuth")];

const SEGMENT_SEPARATOR: char = '.';
const WORD_SEPARATOR: char = '_';
const TYPE_PATH_SEPARATOR: &str = "::";

/// Map a wire discriminator to its target type name.
///
/// Each `.`-separated segment becomes one path component; inside a segment, `_`-separated words are
/// capitalized and concatenated. `billing_portal.session` maps to `BillingPortal::Session`.
pub fn type_name_for(discriminator: &str) -> String {
	if let Some((_, name)) = TYPE_NAME_OVERRIDES.iter().find(|(item, _)| *item == discriminator) {
		return (*name).to_owned();
	}

	discriminator
		.split(SEGMENT_SEPARATOR)
		.map(segment_type_name)
		.collect::<Vec<_>>()
		.join(TYPE_PATH_SEPARATOR)
}

fn segment_type_name(segment: &str) -> String {
	segment.split(WORD_SEPARATOR).map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}
