/// Placeholder label shown for unnamed (positional) fields.
pub const UNNAMED_DISPLAY: &str = "_";

/// Base native name used when a source field name is empty.
pub const UNNAMED_NATIVE: &str = "Field";

/// Translate a source field name into its diagnostic display name.
pub fn display_name(name: &str) -> &str {
	if name.is_empty() { UNNAMED_DISPLAY } else { name }
}

/// Derive the host-visible field name by upper-casing the first character.
pub fn native_field_name(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => UNNAMED_NATIVE.to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use super::{display_name, native_field_name};

	#[test]
	fn first_char_is_upper_cased() {
		assert_eq!(native_field_name("id"), "Id");
		assert_eq!(native_field_name("Id"), "Id");
		assert_eq!(native_field_name("élan"), "Élan");
		assert_eq!(native_field_name("x_y"), "X_y");
	}

	#[test]
	fn unnamed_fields_get_placeholders() {
		assert_eq!(native_field_name(""), "Field");
		assert_eq!(display_name(""), "_");
		assert_eq!(display_name("a"), "a");
	}
}
