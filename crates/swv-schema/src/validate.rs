//! # Recursive Validation
//!
//! Walks a [`DataValue`] and a [`SchemaNode`] tree side by side and collects
//! one [`ValidationError`] per mismatch.
//!
//! ## Ordering
//!
//! For an object, undeclared keys are reported first (in the payload's key
//! order), then declared properties are checked in the schema's declaration
//! order. Array elements are checked by index. The same inputs therefore
//! always produce the same list in the same order.
//!
//! An object schema without a `properties` keyword is free-form: only its
//! object-ness is checked. `properties: {}` instead declares that no keys
//! are allowed.
//!
//! ## Null Handling
//!
//! `null` and absent values satisfy every schema kind. An absent or `null`
//! property is reported only when the enclosing object lists it in
//! `required`.
//!
//! ## Termination
//!
//! Recursive schemas are legal as long as each cycle passes through a
//! property or an array element, since each such step consumes data. A
//! `$ref` chain that loops without consuming data (`A -> B -> A`) is
//! reported as a cycle at the path where it was entered. Total depth is
//! additionally capped at [`MAX_DEPTH`].

use swv_core::{DataValue, SchemaDocument, SchemaKind, SchemaNode, ValidationError, ValidatorError};

use crate::path;
use crate::resolve::{resolve_by_name, resolve_ref};

/// Maximum traversal depth, counting property, element, and `$ref` steps.
pub const MAX_DEPTH: usize = 256;

/// Validate `data` against the schema named `root` in `document`.
///
/// Returns the field violations in traversal order; an empty vector means
/// the data conforms.
///
/// # Errors
///
/// - [`ValidatorError::MissingSchemaName`] if `root` is empty.
/// - [`ValidatorError::UnknownSchema`] if `root` is not declared.
///
/// Problems discovered during traversal (unknown `$ref` targets, reference
/// cycles, malformed nodes) are reported as violations, not errors.
pub fn validate(
    data: &DataValue,
    document: &SchemaDocument,
    root: &str,
) -> Result<Vec<ValidationError>, ValidatorError> {
    if root.is_empty() {
        return Err(ValidatorError::MissingSchemaName);
    }
    let schema = resolve_by_name(document, root)?;

    let mut walker = Walker {
        document,
        violations: Vec::new(),
    };
    walker.check(data, schema, &path::root(root), &mut vec![root], 0);
    Ok(walker.violations)
}

/// [`validate`], flattened to diagnostic strings. A whole-call error
/// becomes the single element of the list.
pub fn validate_messages(data: &DataValue, document: &SchemaDocument, root: &str) -> Vec<String> {
    flatten(validate(data, document, root))
}

/// Decode a JSON payload and a YAML/JSON schema document, then validate.
///
/// Fast-fail order: empty schema name, payload decode, document decode,
/// unknown root schema.
///
/// # Errors
///
/// Any of the whole-call [`ValidatorError`] variants; see [`validate`].
pub fn validate_str(
    payload: &str,
    document_source: &str,
    root: &str,
) -> Result<Vec<ValidationError>, ValidatorError> {
    if root.is_empty() {
        return Err(ValidatorError::MissingSchemaName);
    }
    let data = DataValue::from_json_str(payload)?;
    let document = SchemaDocument::from_yaml_str(document_source)?;
    validate(&data, &document, root)
}

/// [`validate_str`], flattened to diagnostic strings.
pub fn validate_source(payload: &str, document_source: &str, root: &str) -> Vec<String> {
    flatten(validate_str(payload, document_source, root))
}

fn flatten(result: Result<Vec<ValidationError>, ValidatorError>) -> Vec<String> {
    match result {
        Ok(violations) => violations.iter().map(ToString::to_string).collect(),
        Err(err) => vec![err.to_string()],
    }
}

/// Traversal state for a single call.
struct Walker<'a> {
    document: &'a SchemaDocument,
    violations: Vec<ValidationError>,
}

impl<'a> Walker<'a> {
    /// `ref_chain` holds the schema names entered through `$ref` since the
    /// last step that consumed data.
    fn check(
        &mut self,
        data: &DataValue,
        schema: &'a SchemaNode,
        at: &str,
        ref_chain: &mut Vec<&'a str>,
        depth: usize,
    ) {
        if data.is_null() {
            return;
        }
        if depth > MAX_DEPTH {
            self.bound_exceeded(at, format!("maximum validation depth of {MAX_DEPTH} exceeded"));
            return;
        }

        match schema {
            SchemaNode::Object {
                properties,
                required,
                additional_properties,
            } => {
                let DataValue::Object(members) = data else {
                    self.report(
                        at,
                        format!("type expected is object but found {}", data.type_name()),
                    );
                    return;
                };
                // Free-form object: no declared keys to check against.
                let Some(properties) = properties else {
                    return;
                };

                if !additional_properties {
                    for key in members.keys() {
                        if !properties.contains_key(key) {
                            self.report(at, format!("unexpected prop {key}"));
                        }
                    }
                }

                for (name, property_schema) in properties {
                    let property_path = path::property(at, name);
                    match members.get(name).filter(|v| !v.is_null()) {
                        Some(value) => {
                            self.check(value, property_schema, &property_path, &mut Vec::new(), depth + 1)
                        }
                        None if is_required(required.as_deref(), name) => self.report(
                            &property_path,
                            format!("prop {name} is missing but required"),
                        ),
                        None => {}
                    }
                }
            }
            SchemaNode::String => {
                if !matches!(data, DataValue::String(_)) {
                    self.type_mismatch(at, SchemaKind::String, data);
                }
            }
            SchemaNode::Boolean => {
                if !matches!(data, DataValue::Bool(_)) {
                    self.type_mismatch(at, SchemaKind::Boolean, data);
                }
            }
            SchemaNode::Number => {
                if !matches!(data, DataValue::Number(_)) {
                    self.type_mismatch(at, SchemaKind::Number, data);
                }
            }
            SchemaNode::Integer => match data {
                DataValue::Number(n) if n.fract() == 0.0 => {}
                _ => self.type_mismatch(at, SchemaKind::Integer, data),
            },
            SchemaNode::Array { items } => {
                let DataValue::Array(elements) = data else {
                    self.report(at, format!("expected array but found {}", data.type_name()));
                    return;
                };
                let items_path = path::items(at);
                for (index, element) in elements.iter().enumerate() {
                    let element_path = path::element(&items_path, index);
                    self.check(element, items, &element_path, &mut Vec::new(), depth + 1);
                }
            }
            SchemaNode::Reference { path: reference } => {
                let name = resolve_ref(reference);
                if ref_chain.contains(&name) {
                    let chain = ref_chain.join(" -> ");
                    self.bound_exceeded(at, format!("reference cycle detected: {chain} -> {name}"));
                    return;
                }
                match resolve_by_name(self.document, name) {
                    Ok(target) => {
                        ref_chain.push(name);
                        // References are transparent: same path, same data.
                        self.check(data, target, at, ref_chain, depth + 1);
                        ref_chain.pop();
                    }
                    Err(err) => self.violations.push(err.into_violation(at)),
                }
            }
            SchemaNode::Any => {}
            SchemaNode::Malformed { reason } => {
                self.report(at, format!("malformed schema: {reason}"));
            }
        }
    }

    fn report(&mut self, at: &str, message: String) {
        self.violations.push(ValidationError::new(at, message));
    }

    fn type_mismatch(&mut self, at: &str, expected: SchemaKind, found: &DataValue) {
        self.report(
            at,
            format!("expected type {expected} but found {}", found.type_name()),
        );
    }

    fn bound_exceeded(&mut self, at: &str, detail: String) {
        let err = ValidatorError::CycleOrDepthExceeded {
            path: at.to_string(),
            detail,
        };
        self.violations.push(err.into_violation(at));
    }
}

fn is_required(required: Option<&[String]>, name: &str) -> bool {
    required.is_some_and(|names| names.iter().any(|n| n == name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(yaml: &str) -> SchemaDocument {
        SchemaDocument::from_yaml_str(yaml).unwrap()
    }

    fn check(data: serde_json::Value, document: &SchemaDocument, root: &str) -> Vec<String> {
        validate_messages(&DataValue::from(data), document, root)
    }

    const LEAVES: &str = r#"
components:
  schemas:
    Leaves:
      type: object
      properties:
        s: {type: string}
        i: {type: integer}
        n: {type: number}
        b: {type: boolean}
"#;

    // ── Fast-fail cases ──────────────────────────────────────────────

    #[test]
    fn empty_schema_name() {
        let d = doc(LEAVES);
        assert_eq!(check(json!({}), &d, ""), ["Please specify a schema name"]);
        assert_eq!(
            validate(&DataValue::Null, &d, ""),
            Err(ValidatorError::MissingSchemaName)
        );
    }

    #[test]
    fn unknown_root_schema() {
        let d = doc(LEAVES);
        assert_eq!(check(json!({}), &d, "Nope"), ["Unknown schema Nope"]);
    }

    #[test]
    fn empty_name_wins_over_decode_failures() {
        assert_eq!(
            validate_source("not json", "not: [yaml", ""),
            ["Please specify a schema name"]
        );
    }

    #[test]
    fn payload_decode_failure_is_single_message() {
        let messages = validate_source("{\"a\":", LEAVES, "Leaves");
        assert_eq!(messages.len(), 1);
        assert!(matches!(
            validate_str("{\"a\":", LEAVES, "Leaves"),
            Err(ValidatorError::InputDecode(_))
        ));
    }

    #[test]
    fn document_decode_failure_is_single_message() {
        let messages = validate_source("{}", "components: [", "Leaves");
        assert_eq!(messages.len(), 1);
        assert!(matches!(
            validate_str("{}", "components: [", "Leaves"),
            Err(ValidatorError::SchemaDecode(_))
        ));
    }

    #[test]
    fn payload_is_decoded_before_document() {
        assert!(matches!(
            validate_str("{", "components: [", "Leaves"),
            Err(ValidatorError::InputDecode(_))
        ));
    }

    // ── Leaves ───────────────────────────────────────────────────────

    #[test]
    fn conforming_leaves() {
        let d = doc(LEAVES);
        let data = json!({"s": "x", "i": 3, "n": 2.5, "b": false});
        assert!(check(data, &d, "Leaves").is_empty());
    }

    #[test]
    fn leaf_type_mismatches() {
        let d = doc(LEAVES);
        let data = json!({"s": 1, "i": "3", "n": true, "b": "yes"});
        assert_eq!(
            check(data, &d, "Leaves"),
            [
                "Leaves.s: expected type string but found float64",
                "Leaves.i: expected type integer but found string",
                "Leaves.n: expected type number but found bool",
                "Leaves.b: expected type boolean but found string",
            ]
        );
    }

    #[test]
    fn integer_accepts_whole_floats_only() {
        let d = doc(LEAVES);
        assert!(check(json!({"i": 5.0}), &d, "Leaves").is_empty());
        assert!(check(json!({"i": -12}), &d, "Leaves").is_empty());
        assert_eq!(
            check(json!({"i": 5.5}), &d, "Leaves"),
            ["Leaves.i: expected type integer but found float64"]
        );
    }

    #[test]
    fn null_satisfies_every_kind() {
        let d = doc(LEAVES);
        let data = json!({"s": null, "i": null, "n": null, "b": null});
        assert!(check(data, &d, "Leaves").is_empty());
        assert!(check(json!(null), &d, "Leaves").is_empty());
    }

    #[test]
    fn leaf_mismatch_names_container_kinds() {
        let d = doc(LEAVES);
        assert_eq!(
            check(json!({"s": [], "b": {}}), &d, "Leaves"),
            [
                "Leaves.s: expected type string but found array",
                "Leaves.b: expected type boolean but found object",
            ]
        );
    }

    // ── Objects ──────────────────────────────────────────────────────

    const OBJECTS: &str = r#"
components:
  schemas:
    Account:
      type: object
      required: [login, email]
      properties:
        login: {type: string}
        email: {type: string}
        nick: {type: string}
    Open:
      type: object
      additionalProperties: true
      properties:
        id: {type: integer}
    Loose:
      type: object
      properties:
        id: {type: integer}
    Bare:
      type: object
    Sealed:
      type: object
      properties: {}
    Event:
      type: object
      properties:
        name: {type: string}
        meta: {type: object}
    EmptyRequired:
      type: object
      required: []
      properties:
        id: {type: integer}
    Phantom:
      type: object
      required: [ghost, id]
      properties:
        id: {type: integer}
"#;

    #[test]
    fn missing_required_properties() {
        let d = doc(OBJECTS);
        assert_eq!(
            check(json!({"email": null}), &d, "Account"),
            [
                "Account.login: prop login is missing but required",
                "Account.email: prop email is missing but required",
            ]
        );
    }

    #[test]
    fn absent_optional_property_is_fine() {
        let d = doc(OBJECTS);
        assert!(check(json!({"login": "a", "email": "b"}), &d, "Account").is_empty());
    }

    #[test]
    fn without_required_nothing_is_missing() {
        let d = doc(OBJECTS);
        assert!(check(json!({}), &d, "Loose").is_empty());
    }

    #[test]
    fn unexpected_props_in_payload_order_before_property_checks() {
        let d = doc(OBJECTS);
        assert_eq!(
            check(json!({"zz": 1, "login": 7, "email": "e", "aa": 2}), &d, "Account"),
            [
                "Account: unexpected prop zz",
                "Account: unexpected prop aa",
                "Account.login: expected type string but found float64",
            ]
        );
    }

    #[test]
    fn additional_properties_true_allows_extra_keys() {
        let d = doc(OBJECTS);
        assert!(check(json!({"id": 1, "extra": {"x": 1}}), &d, "Open").is_empty());
        // Declared properties are still checked.
        assert_eq!(
            check(json!({"id": "1", "extra": 1}), &d, "Open"),
            ["Open.id: expected type integer but found string"]
        );
    }

    #[test]
    fn object_without_properties_is_free_form() {
        let d = doc(OBJECTS);
        assert!(check(json!({}), &d, "Bare").is_empty());
        assert!(check(json!({"a": 1, "b": [true]}), &d, "Bare").is_empty());
        // Still an object.
        assert_eq!(
            check(json!(3), &d, "Bare"),
            ["Bare: type expected is object but found float64"]
        );
    }

    #[test]
    fn nested_free_form_object_accepts_any_keys() {
        let d = doc(OBJECTS);
        let data = json!({"name": "x", "meta": {"trace": "abc", "span": 1}});
        assert!(check(data, &d, "Event").is_empty());
    }

    #[test]
    fn empty_properties_rejects_every_key() {
        let d = doc(OBJECTS);
        assert!(check(json!({}), &d, "Sealed").is_empty());
        assert_eq!(
            check(json!({"a": 1, "b": 2}), &d, "Sealed"),
            ["Sealed: unexpected prop a", "Sealed: unexpected prop b"]
        );
    }

    #[test]
    fn empty_required_list_behaves_like_no_required() {
        let d = doc(OBJECTS);
        assert!(check(json!({}), &d, "EmptyRequired").is_empty());
        assert!(check(json!({}), &d, "Loose").is_empty());
        assert!(check(json!({"id": null}), &d, "EmptyRequired").is_empty());
    }

    #[test]
    fn required_name_without_declared_property_is_ignored() {
        let d = doc(OBJECTS);
        assert_eq!(
            check(json!({}), &d, "Phantom"),
            ["Phantom.id: prop id is missing but required"]
        );
        assert!(check(json!({"id": 4}), &d, "Phantom").is_empty());
    }

    #[test]
    fn non_object_stops_descent() {
        let d = doc(OBJECTS);
        assert_eq!(
            check(json!("account"), &d, "Account"),
            ["Account: type expected is object but found string"]
        );
        assert_eq!(
            check(json!([1]), &d, "Account"),
            ["Account: type expected is object but found array"]
        );
    }

    // ── Arrays ───────────────────────────────────────────────────────

    const ARRAYS: &str = r#"
components:
  schemas:
    Grid:
      type: object
      properties:
        tags:
          type: array
          items: {type: string}
        rows:
          type: array
          items:
            type: array
            items: {type: integer}
        points:
          type: array
          items:
            $ref: '#/components/schemas/Point'
    Point:
      type: object
      required: [x]
      properties:
        x: {type: number}
"#;

    #[test]
    fn array_elements_use_double_bracket_paths() {
        let d = doc(ARRAYS);
        assert_eq!(
            check(json!({"tags": ["a", 2, "c", false]}), &d, "Grid"),
            [
                "Grid.tags[][1]: expected type string but found float64",
                "Grid.tags[][3]: expected type string but found bool",
            ]
        );
    }

    #[test]
    fn nested_arrays_compose_paths() {
        let d = doc(ARRAYS);
        assert_eq!(
            check(json!({"rows": [[1, 2], [3, "4"], 5]}), &d, "Grid"),
            [
                "Grid.rows[][1][][1]: expected type integer but found string",
                "Grid.rows[][2]: expected array but found float64",
            ]
        );
    }

    #[test]
    fn non_array_value() {
        let d = doc(ARRAYS);
        assert_eq!(
            check(json!({"tags": "a,b"}), &d, "Grid"),
            ["Grid.tags: expected array but found string"]
        );
    }

    #[test]
    fn null_elements_and_empty_arrays_pass() {
        let d = doc(ARRAYS);
        assert!(check(json!({"tags": [], "rows": [null, [null]]}), &d, "Grid").is_empty());
    }

    #[test]
    fn referenced_items_keep_element_path() {
        let d = doc(ARRAYS);
        assert_eq!(
            check(json!({"points": [{"x": 1}, {}, {"x": "2", "y": 0}]}), &d, "Grid"),
            [
                "Grid.points[][1].x: prop x is missing but required",
                "Grid.points[][2]: unexpected prop y",
                "Grid.points[][2].x: expected type number but found string",
            ]
        );
    }

    // ── References ───────────────────────────────────────────────────

    #[test]
    fn forward_reference_resolves_lazily() {
        let d = doc(r#"
components:
  schemas:
    Order:
      type: object
      properties:
        customer: {$ref: '#/components/schemas/Customer'}
    Customer:
      type: object
      properties:
        name: {type: string}
"#);
        assert_eq!(
            check(json!({"customer": {"name": 1}}), &d, "Order"),
            ["Order.customer.name: expected type string but found float64"]
        );
    }

    #[test]
    fn root_may_itself_be_a_reference_chain() {
        let d = doc(r#"
components:
  schemas:
    Alias: {$ref: '#/components/schemas/Target'}
    Target: {$ref: '#/components/schemas/Leaf'}
    Leaf: {type: string}
"#);
        assert!(check(json!("ok"), &d, "Alias").is_empty());
        assert_eq!(
            check(json!(1), &d, "Alias"),
            ["Alias: expected type string but found float64"]
        );
    }

    #[test]
    fn unknown_reference_is_a_violation_not_an_abort() {
        let d = doc(r#"
components:
  schemas:
    Pet:
      type: object
      properties:
        owner: {$ref: '#/components/schemas/Owner'}
        name: {type: string}
"#);
        assert_eq!(
            check(json!({"owner": {}, "name": 3}), &d, "Pet"),
            [
                "Pet.owner: Unknown schema Owner",
                "Pet.name: expected type string but found float64",
            ]
        );
    }

    #[test]
    fn reference_cycle_terminates_with_violation() {
        let d = doc(r#"
components:
  schemas:
    A: {$ref: '#/components/schemas/B'}
    B: {$ref: '#/components/schemas/A'}
    Self: {$ref: '#/components/schemas/Self'}
"#);
        assert_eq!(
            check(json!({"any": 1}), &d, "A"),
            ["A: reference cycle detected: A -> B -> A"]
        );
        assert_eq!(
            check(json!(1), &d, "Self"),
            ["Self: reference cycle detected: Self -> Self"]
        );
    }

    #[test]
    fn recursive_schema_through_data_is_not_a_cycle() {
        let d = doc(r#"
components:
  schemas:
    Node:
      type: object
      properties:
        value: {type: integer}
        children:
          type: array
          items: {$ref: '#/components/schemas/Node'}
"#);
        let data = json!({
            "value": 1,
            "children": [
                {"value": 2, "children": []},
                {"value": 3, "children": [{"value": "four"}]}
            ]
        });
        assert_eq!(
            check(data, &d, "Node"),
            ["Node.children[][1].children[][0].value: expected type integer but found string"]
        );
    }

    #[test]
    fn depth_bound_is_enforced() {
        let d = doc(r#"
components:
  schemas:
    Chain:
      type: object
      additionalProperties: true
      properties:
        next: {$ref: '#/components/schemas/Chain'}
"#);
        // Each level costs one property step and one reference step.
        let mut data = json!({});
        for _ in 0..MAX_DEPTH {
            data = json!({ "next": data });
        }
        let violations = validate(&DataValue::from(data), &d, "Chain").unwrap();
        assert_eq!(violations.len(), 1);
        assert!(
            violations[0]
                .message
                .contains(&format!("maximum validation depth of {MAX_DEPTH} exceeded")),
            "got {violations:?}"
        );
        assert!(violations[0].path.starts_with("Chain.next.next"));
    }

    // ── Any / malformed nodes ────────────────────────────────────────

    #[test]
    fn untyped_schema_accepts_anything() {
        let d = doc("components:\n  schemas:\n    Free: {description: anything}\n");
        assert!(check(json!({"a": [1, {"b": null}]}), &d, "Free").is_empty());
    }

    #[test]
    fn malformed_node_reports_only_when_reached_with_data() {
        let d = doc(r#"
components:
  schemas:
    Form:
      type: object
      properties:
        broken: {type: array}
        fine: {type: string}
"#);
        assert!(check(json!({"fine": "x"}), &d, "Form").is_empty());
        assert_eq!(
            check(json!({"broken": [1], "fine": 2}), &d, "Form"),
            [
                "Form.broken: malformed schema: array schema requires `items`",
                "Form.fine: expected type string but found float64",
            ]
        );
    }

    #[test]
    fn reference_to_malformed_target_degrades_at_reference_path() {
        let d = doc(r#"
components:
  schemas:
    Wrapper:
      type: object
      properties:
        inner: {$ref: '#/components/schemas/Bad'}
    Bad:
      type: object
      properties: 12
"#);
        assert_eq!(
            check(json!({"inner": {"a": 1}}), &d, "Wrapper"),
            ["Wrapper.inner: malformed schema: `properties` must be a mapping"]
        );
    }

    // ── Determinism ──────────────────────────────────────────────────

    #[test]
    fn repeated_calls_are_identical() {
        let d = doc(OBJECTS);
        let data = DataValue::from(json!({"q": 1, "login": 2, "p": 3}));
        let first = validate_messages(&data, &d, "Account");
        for _ in 0..10 {
            assert_eq!(validate_messages(&data, &d, "Account"), first);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;

    const DOCUMENT: &str = r#"
components:
  schemas:
    Root:
      type: object
      required: [id]
      properties:
        id: {type: integer}
        name: {type: string}
        score: {type: number}
        flag: {type: boolean}
        items:
          type: array
          items: {$ref: '#/components/schemas/Root'}
        loop: {$ref: '#/components/schemas/Loop'}
    Loop: {$ref: '#/components/schemas/Loop2'}
    Loop2: {$ref: '#/components/schemas/Loop'}
"#;

    /// Arbitrary JSON values, keys drawn from the schema's vocabulary so
    /// that declared properties are actually exercised.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| serde_json::json!(n)),
            (-1.0e6f64..1.0e6).prop_map(|f| serde_json::json!(f)),
            "[a-z ]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map(
                    prop_oneof![
                        Just("id".to_string()),
                        Just("name".to_string()),
                        Just("items".to_string()),
                        Just("loop".to_string()),
                        "[a-z]{1,6}",
                    ],
                    inner,
                    0..6,
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// Validation is deterministic, including ordering.
        #[test]
        fn validation_is_deterministic(value in json_value()) {
            let document = SchemaDocument::from_yaml_str(DOCUMENT).unwrap();
            let data = DataValue::from(value);
            let a = validate(&data, &document, "Root");
            let b = validate(&data, &document, "Root");
            prop_assert_eq!(a, b);
        }

        /// Every violation is rooted at the root schema name, even through
        /// reference cycles.
        #[test]
        fn violations_are_rooted(value in json_value()) {
            let document = SchemaDocument::from_yaml_str(DOCUMENT).unwrap();
            let violations = validate(&DataValue::from(value), &document, "Root").unwrap();
            for v in &violations {
                prop_assert!(v.path.starts_with("Root"), "unrooted path: {}", v.path);
            }
        }

        /// The message-level API is exactly the typed API, displayed.
        #[test]
        fn messages_match_typed_result(value in json_value()) {
            let document = SchemaDocument::from_yaml_str(DOCUMENT).unwrap();
            let data = DataValue::from(value);
            let typed: Vec<String> = validate(&data, &document, "Root")
                .unwrap()
                .iter()
                .map(ToString::to_string)
                .collect();
            prop_assert_eq!(validate_messages(&data, &document, "Root"), typed);
        }
    }
}
