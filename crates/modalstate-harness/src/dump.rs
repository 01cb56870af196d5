#![forbid(unsafe_code)]

//! Text rendering of structural descriptions.
//!
//! Records and lists break across lines with two-space indentation; enum
//! cases and leaves stay inline:
//!
//! ```text
//! AlertState(
//!   title: "Alert!",
//!   actions: [
//!     [0]: ButtonState(
//!       role: .cancel,
//!       action: .send(false),
//!       label: "Cancel"
//!     )
//!   ]
//! )
//! ```

use modalstate_core::{Describe, Description};

/// Dump any describable value.
pub fn dump<T: Describe + ?Sized>(value: &T) -> String {
    render(&value.describe())
}

/// Render a description.
pub fn render(description: &Description) -> String {
    let mut out = String::new();
    write_node(&mut out, description, 0);
    out
}

fn pad(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat_n(' ', indent));
}

fn write_node(out: &mut String, node: &Description, indent: usize) {
    match node {
        Description::Leaf(value) => out.push_str(value),
        Description::Case { name, args } => {
            out.push('.');
            out.push_str(name);
            if args.is_empty() {
                return;
            }
            out.push('(');
            for (i, (label, value)) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if let Some(label) = label {
                    out.push_str(label);
                    out.push_str(": ");
                }
                write_node(out, value, indent);
            }
            out.push(')');
        }
        Description::Record { name, fields } => {
            out.push_str(name);
            out.push('(');
            if fields.is_empty() {
                out.push(')');
                return;
            }
            out.push('\n');
            for (i, (label, value)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                pad(out, indent + 2);
                out.push_str(label);
                out.push_str(": ");
                write_node(out, value, indent + 2);
            }
            out.push('\n');
            pad(out, indent);
            out.push(')');
        }
        Description::List(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                pad(out, indent + 2);
                out.push_str(&format!("[{i}]: "));
                write_node(out, item, indent + 2);
            }
            out.push('\n');
            pad(out, indent);
            out.push(']');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modalstate_core::{AlertState, ButtonState};

    #[test]
    fn leaf_and_case() {
        assert_eq!(render(&Description::Leaf("42".into())), "42");
        assert_eq!(render(&Description::case("cancel")), ".cancel");
        let case = Description::case("send")
            .arg(None, Description::Leaf("1".into()))
            .arg(Some("animation"), Description::case("spring"));
        assert_eq!(render(&case), ".send(1, animation: .spring)");
    }

    #[test]
    fn empty_record_and_list() {
        assert_eq!(render(&Description::record("Unit")), "Unit()");
        assert_eq!(render(&Description::List(Vec::new())), "[]");
    }

    #[test]
    fn title_only_alert() {
        let alert = AlertState::<u8>::new("Saved");
        assert_eq!(dump(&alert), "AlertState(\n  title: \"Saved\"\n)");
    }

    #[test]
    fn nested_indentation() {
        let alert = AlertState::builder("Hi")
            .button(ButtonState::new("OK").send(1))
            .build();
        let expected = "\
AlertState(
  title: \"Hi\",
  actions: [
    [0]: ButtonState(
      action: .send(1),
      label: \"OK\"
    )
  ]
)";
        assert_eq!(dump(&alert), expected);
    }
}
