use tagdump::store::Value;

/// Output truncation limits for rendered values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for containers.
	pub max_items: usize,
	/// Maximum number of bytes printed for byte strings.
	pub max_bytes: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_items: 16,
			max_bytes: 32,
		}
	}
}

/// Render a value on one line, truncating long strings and containers.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::None => "None".to_owned(),
		Value::Bool(v) => if *v { "True" } else { "False" }.to_owned(),
		Value::Int(v) => v.to_string(),
		Value::Float(v) => render_float(*v),
		Value::Complex(v) => format!("({}{:+}j)", render_float(v.re), v.im),
		Value::Str(v) => format!("{:?}", truncate(v, options.max_string_len)),
		Value::Bytes(v) => render_bytes(v, options.max_bytes),
		Value::List(items) => render_items("[", "]", items.iter(), items.len(), options),
		Value::Tuple(items) if items.len() == 1 => format!("({},)", render_value(&items[0], options)),
		Value::Tuple(items) => render_items("(", ")", items.iter(), items.len(), options),
		Value::Set(items) if items.is_empty() => "set()".to_owned(),
		Value::Set(items) => render_items("{", "}", items.iter(), items.len(), options),
	}
}

fn render_items<'a>(open: &str, close: &str, items: impl Iterator<Item = &'a Value>, len: usize, options: PrintOptions) -> String {
	let mut parts: Vec<String> = items.take(options.max_items).map(|item| render_value(item, options)).collect();
	if len > options.max_items {
		parts.push(format!("... {} more", len - options.max_items));
	}
	format!("{open}{}{close}", parts.join(", "))
}

fn render_float(value: f64) -> String {
	if value.is_finite() && value.fract() == 0.0 {
		format!("{value:.1}")
	} else {
		value.to_string()
	}
}

fn render_bytes(bytes: &[u8], max: usize) -> String {
	let mut out = String::from("b'");
	for byte in bytes.iter().take(max) {
		match byte {
			b'\\' => out.push_str("\\\\"),
			b'\'' => out.push_str("\\'"),
			0x20..=0x7e => out.push(char::from(*byte)),
			_ => out.push_str(&format!("\\x{byte:02x}")),
		}
	}
	out.push('\'');
	if bytes.len() > max {
		out.push_str(&format!("... {} more", bytes.len() - max));
	}
	out
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests {
	use tagdump::store::{Complex, Value};

	use super::{PrintOptions, render_value};

	#[test]
	fn renders_each_kind() {
		let options = PrintOptions::default();
		assert_eq!(render_value(&Value::None, options), "None");
		assert_eq!(render_value(&Value::Bool(true), options), "True");
		assert_eq!(render_value(&Value::Float(2.0), options), "2.0");
		assert_eq!(render_value(&Value::Complex(Complex::new(3.0, 4.0)), options), "(3.0+4j)");
		assert_eq!(render_value(&Value::bytes(*b"a\x00'"), options), "b'a\\x00\\''");
		assert_eq!(render_value(&Value::Tuple(vec![Value::Int(1)]), options), "(1,)");
		assert_eq!(render_value(&Value::set([]), options), "set()");
	}

	#[test]
	fn long_containers_are_truncated() {
		let options = PrintOptions {
			max_items: 2,
			..PrintOptions::default()
		};
		let list = Value::List((0..5).map(Value::Int).collect());
		assert_eq!(render_value(&list, options), "[0, 1, ... 3 more]");
	}
}
