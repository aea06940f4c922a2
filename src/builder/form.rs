use serde::Deserialize;

use crate::{
    class_list::ClassList,
    node::{Node, NodeFactory},
};

use super::{lenient, set_flag, set_int, set_number, set_str, Nodeworthy};

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub method: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub target: Option<String>,
    /// Either `"on"` or `"off"`
    #[serde(deserialize_with = "lenient")]
    pub autocomplete: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub accept_charset: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub novalidate: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub enctype: Option<String>,
}

/// Attributes of a text input. Strings are only set when not empty.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextInputOptions {
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub placeholder: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub minlength: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub maxlength: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub autocomplete: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<i64>,
    /// Regular expression the browser checks the value against
    #[serde(deserialize_with = "lenient")]
    pub pattern: Option<String>,
    /// Id of a `<datalist>` with suggestions
    #[serde(deserialize_with = "lenient")]
    pub list: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub readonly: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub required: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub disabled: Option<bool>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailInputOptions {
    #[serde(flatten)]
    pub text: TextInputOptions,
    #[serde(deserialize_with = "lenient")]
    pub multiple: Option<bool>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberInputOptions {
    #[serde(deserialize_with = "lenient")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub placeholder: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub step: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub autocomplete: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub pattern: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub list: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub readonly: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub required: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub disabled: Option<bool>,
}

impl<F: NodeFactory> Nodeworthy<F> {
    pub fn form(
        &self,
        options: FormOptions,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        let mut node = self.element("form", class_list, id);

        set_str(&mut node, "name", options.name.as_deref());
        set_str(&mut node, "action", options.action.as_deref());
        set_str(&mut node, "method", options.method.as_deref());
        set_str(&mut node, "target", options.target.as_deref());

        match options.autocomplete.as_deref() {
            Some(mode @ ("on" | "off")) => node.set_attribute("autocomplete", mode),
            Some(mode) => {
                tracing::trace!(attribute = "autocomplete", mode, "ignoring unknown mode")
            }
            None => {}
        }

        set_str(&mut node, "accept-charset", options.accept_charset.as_deref());
        set_flag(&mut node, "novalidate", options.novalidate);
        set_str(&mut node, "enctype", options.enctype.as_deref());

        node
    }

    pub fn input_text(
        &self,
        options: TextInputOptions,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        let mut node = self.input("text", class_list, id);
        apply_text_options(&mut node, &options);
        node
    }

    pub fn input_email(
        &self,
        options: EmailInputOptions,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        let mut node = self.input("email", class_list, id);
        apply_text_options(&mut node, &options.text);
        set_flag(&mut node, "multiple", options.multiple);
        node
    }

    /// Creates a number input. `min` isn't checked against `max`.
    pub fn input_number(
        &self,
        options: NumberInputOptions,
        class_list: impl Into<ClassList>,
        id: &str,
    ) -> F::Node {
        let mut node = self.input("number", class_list, id);

        set_number(&mut node, "value", options.value);
        set_str(&mut node, "name", options.name.as_deref());
        set_str(&mut node, "placeholder", options.placeholder.as_deref());
        set_number(&mut node, "min", options.min);
        set_number(&mut node, "max", options.max);
        match options.step {
            Some(step) if step > 0.0 => set_number(&mut node, "step", Some(step)),
            Some(step) => {
                tracing::trace!(attribute = "step", step, "ignoring non-positive step")
            }
            None => {}
        }
        set_str(&mut node, "autocomplete", options.autocomplete.as_deref());
        set_int(&mut node, "size", options.size, 1);
        set_str(&mut node, "pattern", options.pattern.as_deref());
        set_str(&mut node, "list", options.list.as_deref());
        set_flag(&mut node, "readonly", options.readonly);
        set_flag(&mut node, "required", options.required);
        set_flag(&mut node, "disabled", options.disabled);

        node
    }

    fn input(&self, kind: &str, class_list: impl Into<ClassList>, id: &str) -> F::Node {
        let mut node = self.element("input", class_list, id);
        node.set_attribute("type", kind);
        node
    }
}

fn apply_text_options<N: Node>(node: &mut N, options: &TextInputOptions) {
    set_str(node, "value", options.value.as_deref());
    set_str(node, "name", options.name.as_deref());
    set_str(node, "placeholder", options.placeholder.as_deref());
    set_int(node, "minlength", options.minlength, 0);
    set_int(node, "maxlength", options.maxlength, 0);
    set_str(node, "autocomplete", options.autocomplete.as_deref());
    set_int(node, "size", options.size, 1);
    set_str(node, "pattern", options.pattern.as_deref());
    set_str(node, "list", options.list.as_deref());
    set_flag(node, "readonly", options.readonly);
    set_flag(node, "required", options.required);
    set_flag(node, "disabled", options.disabled);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        builder::tests::{recording, Op},
        html::Attribute,
    };

    fn attr(node: &crate::html::Element, key: &str) -> Option<String> {
        node.attribute(key).map(|a| match a {
            Attribute::Empty => String::new(),
            Attribute::Value(value) => value.clone(),
        })
    }

    #[test]
    fn test_form() {
        let nw = Nodeworthy::new();

        let form = nw.form(
            FormOptions {
                name: Some("dummy-form".into()),
                action: Some("".into()),
                target: Some("_self".into()),
                autocomplete: Some("off".into()),
                novalidate: Some(true),
                ..Default::default()
            },
            "flex-column",
            "dummy-form",
        );

        assert_eq!(
            form.to_html(),
            "<form id=\"dummy-form\" class=\"flex-column\" name=\"dummy-form\" target=\"_self\" autocomplete=\"off\" novalidate></form>"
        );
    }

    #[test]
    fn test_form_autocomplete_only_on_or_off() {
        let nw = Nodeworthy::new();

        for mode in ["On", "", "maybe"] {
            let form = nw.form(
                FormOptions {
                    autocomplete: Some(mode.into()),
                    novalidate: Some(false),
                    ..Default::default()
                },
                (),
                "",
            );
            assert!(form.attributes().is_empty());
        }

        let form = nw.form(
            FormOptions {
                autocomplete: Some("on".into()),
                ..Default::default()
            },
            (),
            "",
        );
        assert_eq!(attr(&form, "autocomplete").as_deref(), Some("on"));
    }

    #[test]
    fn test_text_input_empty_value_is_absent() {
        let nw = Nodeworthy::new();

        let input = nw.input_text(
            TextInputOptions {
                value: Some("".into()),
                required: Some(true),
                ..Default::default()
            },
            (),
            "",
        );

        assert_eq!(attr(&input, "type").as_deref(), Some("text"));
        assert_eq!(input.attribute("required"), Some(&Attribute::Empty));
        assert!(input.attribute("value").is_none());
        assert_eq!(input.to_html(), "<input type=\"text\" required />");
    }

    #[test]
    fn test_text_input_all_fields() {
        let (nw, ops) = recording();

        nw.input_text(
            TextInputOptions {
                value: Some("US".into()),
                name: Some("input-cc".into()),
                placeholder: Some("US".into()),
                minlength: Some(2),
                maxlength: Some(2),
                autocomplete: Some("country".into()),
                size: Some(4),
                pattern: Some("^[A-Za-z]+$".into()),
                list: Some("countries".into()),
                readonly: Some(true),
                required: Some(true),
                disabled: Some(true),
            },
            (),
            "input-cc",
        );

        let set = |k: &str, v: &str| Op::SetAttribute(k.into(), v.into());
        assert_eq!(
            ops.take(),
            [
                Op::Create("input".into()),
                Op::SetId("input-cc".into()),
                set("type", "text"),
                set("value", "US"),
                set("name", "input-cc"),
                set("placeholder", "US"),
                set("minlength", "2"),
                set("maxlength", "2"),
                set("autocomplete", "country"),
                set("size", "4"),
                set("pattern", "^[A-Za-z]+$"),
                set("list", "countries"),
                Op::ToggleAttribute("readonly".into(), true),
                Op::ToggleAttribute("required".into(), true),
                Op::ToggleAttribute("disabled".into(), true),
            ]
        );
    }

    #[test]
    fn test_text_input_ranges() {
        let nw = Nodeworthy::new();

        let input = nw.input_text(
            TextInputOptions {
                minlength: Some(0),
                maxlength: Some(-1),
                size: Some(0),
                readonly: Some(false),
                ..Default::default()
            },
            (),
            "",
        );

        assert_eq!(attr(&input, "minlength").as_deref(), Some("0"));
        assert!(input.attribute("maxlength").is_none());
        assert!(input.attribute("size").is_none());
        assert!(input.attribute("readonly").is_none());
    }

    #[test]
    fn test_min_length_is_not_checked_against_max_length() {
        let nw = Nodeworthy::new();

        let input = nw.input_text(
            TextInputOptions {
                minlength: Some(10),
                maxlength: Some(2),
                ..Default::default()
            },
            (),
            "",
        );

        assert_eq!(attr(&input, "minlength").as_deref(), Some("10"));
        assert_eq!(attr(&input, "maxlength").as_deref(), Some("2"));
    }

    #[test]
    fn test_number_input() {
        let nw = Nodeworthy::new();

        let input = nw.input_number(
            NumberInputOptions {
                value: Some(21.0),
                name: Some("input-age".into()),
                min: Some(1.0),
                max: Some(f64::INFINITY),
                step: Some(0.5),
                required: Some(true),
                ..Default::default()
            },
            (),
            "input-age",
        );

        assert_eq!(
            input.to_html(),
            "<input id=\"input-age\" type=\"number\" value=\"21\" name=\"input-age\" min=\"1\" step=\"0.5\" required />"
        );
    }

    #[test]
    fn test_number_input_invalid_values() {
        let nw = Nodeworthy::new();

        let input = nw.input_number(
            NumberInputOptions {
                value: Some(f64::NAN),
                step: Some(0.0),
                size: Some(-3),
                pattern: Some("".into()),
                ..Default::default()
            },
            (),
            "",
        );

        assert_eq!(input.to_html(), "<input type=\"number\" />");
    }

    #[test]
    fn test_email_input() {
        let nw = Nodeworthy::new();

        let input = nw.input_email(
            EmailInputOptions {
                text: TextInputOptions {
                    placeholder: Some("john@fakemail.com".into()),
                    name: Some("input-email".into()),
                    ..Default::default()
                },
                multiple: Some(true),
            },
            (),
            "",
        );

        assert_eq!(
            input.to_html(),
            "<input type=\"email\" name=\"input-email\" placeholder=\"john@fakemail.com\" multiple />"
        );
    }

    #[test]
    fn test_options_from_json() {
        let options: EmailInputOptions = serde_json::from_value(json!({
            "name": "input-email",
            "required": true,
            "multiple": false,
        }))
        .unwrap();

        assert_eq!(options.text.name.as_deref(), Some("input-email"));
        assert_eq!(options.text.required, Some(true));
        assert_eq!(options.multiple, Some(false));

        let options: FormOptions =
            serde_json::from_value(json!({ "accept_charset": "utf-8" })).unwrap();
        assert_eq!(options.accept_charset.as_deref(), Some("utf-8"));
    }

    #[test]
    fn test_same_options_give_equal_inputs() {
        let nw = Nodeworthy::new();
        let options = TextInputOptions {
            name: Some("input-name".into()),
            required: Some(true),
            ..Default::default()
        };

        let first = nw.input_text(options.clone(), "a", "x");
        let second = nw.input_text(options, "a", "x");

        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_mistyped_json_fields_are_left_unset() {
        let options: TextInputOptions = serde_json::from_value(json!({
            "name": "n",
            "required": true,
            "size": "4",
            "minlength": 2.5,
            "readonly": "yes",
        }))
        .unwrap();

        assert_eq!(
            options,
            TextInputOptions {
                name: Some("n".into()),
                required: Some(true),
                ..Default::default()
            }
        );

        let input = Nodeworthy::new().input_text(options, (), "");
        assert_eq!(input.to_html(), "<input type=\"text\" name=\"n\" required />");
    }

    #[test]
    fn test_mistyped_json_fields_in_other_bags() {
        let options: EmailInputOptions = serde_json::from_value(json!({
            "name": 5,
            "placeholder": "john@fakemail.com",
            "multiple": "true",
        }))
        .unwrap();
        assert_eq!(options.text.name, None);
        assert_eq!(options.text.placeholder.as_deref(), Some("john@fakemail.com"));
        assert_eq!(options.multiple, None);

        let options: NumberInputOptions =
            serde_json::from_value(json!({ "min": "1", "max": 99, "step": null })).unwrap();
        assert_eq!(options.min, None);
        assert_eq!(options.max, Some(99.0));
        assert_eq!(options.step, None);

        let options: FormOptions =
            serde_json::from_value(json!({ "novalidate": 1, "method": ["post"] })).unwrap();
        assert_eq!(options, FormOptions::default());
    }
}
