use pretty_assertions::assert_eq;

use super::StructValue;
use crate::value::{
	BasicType, ContentId, EvalError, Field, NativeValue, OpaqueValue, SeriesValue, Span, Type, Value, WireField, WireValue, blend,
};

fn root() -> Span<'static> {
	Span::root()
}

fn point(fields: Vec<Field>) -> StructValue {
	StructValue::new(fields)
}

fn opaque(label: &str) -> Value {
	Value::Opaque(OpaqueValue { label: label.into() })
}

mod equality {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn permuted_fields_compare_equal() {
		let a = point(vec![Field::new("x", 1_i64), Field::new("y", "two")]);
		let b = point(vec![Field::new("y", "two"), Field::new("x", 1_i64)]);
		assert!(a.equal(&root(), &b));
		assert!(b.equal(&root(), &a));
	}

	#[test]
	fn empty_fields_are_invisible() {
		let plain = point(vec![Field::new("x", 1_i64)]);
		let padded = point(vec![
			Field::new("ghost", Value::Empty),
			Field::new("x", 1_i64),
			Field::new("none", SeriesValue::new(Vec::new())),
		]);
		assert!(plain.equal(&root(), &padded));
		assert_eq!(plain.hash(&root()), padded.hash(&root()));
	}

	#[test]
	fn differing_counts_names_or_values_are_unequal() {
		let base = point(vec![Field::new("x", 1_i64), Field::new("y", 2_i64)]);
		let shorter = point(vec![Field::new("x", 1_i64)]);
		let renamed = point(vec![Field::new("x", 1_i64), Field::new("z", 2_i64)]);
		let changed = point(vec![Field::new("x", 1_i64), Field::new("y", 3_i64)]);
		let retyped = point(vec![Field::new("x", 1_i64), Field::new("y", 2.0)]);
		for other in [&shorter, &renamed, &changed, &retyped] {
			assert!(!base.equal(&root(), other), "{base} vs {other}");
		}
	}

	#[test]
	fn nested_structs_compare_recursively_and_order_free() {
		let a = point(vec![Field::new("inner", point(vec![Field::new("p", true), Field::new("q", false)]))]);
		let b = point(vec![Field::new("inner", point(vec![Field::new("q", false), Field::new("p", true)]))]);
		assert!(a.equal(&root(), &b));
	}

	#[test]
	fn monadic_flag_does_not_affect_equality() {
		let a = point(vec![Field::monadic("x", 1_i64)]);
		let b = point(vec![Field::new("x", 1_i64)]);
		assert!(a.equal(&root(), &b));
	}

	#[test]
	fn struct_is_never_equal_to_other_variants() {
		let a = Value::Struct(point(vec![Field::new("x", 1_i64)]));
		assert!(!a.equal(&root(), &Value::from(1_i64)));
		assert!(!a.equal(&root(), &Value::Empty));
	}
}

mod hashing {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn hash_blends_names_and_values_in_stored_order() {
		let v1 = Value::from(10_i64);
		let v2 = Value::from("ten");
		let item = point(vec![Field::new("a", v1.clone()), Field::monadic("b", v2.clone())]);

		let expected = blend(&[
			ContentId::of_str("a"),
			v1.hash(&root()),
			ContentId::of_str("b"),
			v2.hash(&root()),
		]);
		assert_eq!(item.hash(&root()), expected);
	}

	#[test]
	fn permutations_compare_equal_but_hash_differently() {
		let a = point(vec![Field::new("x", 1_i64), Field::new("y", 2_i64)]);
		let b = point(vec![Field::new("y", 2_i64), Field::new("x", 1_i64)]);

		assert!(a.equal(&root(), &b));
		assert_ne!(a.hash(&root()), b.hash(&root()), "stored-order hashing is kept as-is");
		assert_eq!(a.canonical_hash(&root()), b.canonical_hash(&root()));
	}

	#[test]
	fn canonical_hash_is_order_free_at_every_level() {
		let a = point(vec![
			Field::new("s", SeriesValue::new(vec![point(vec![Field::new("m", 1_i64), Field::new("n", 2_i64)]).into()])),
			Field::new("t", true),
		]);
		let b = point(vec![
			Field::new("t", true),
			Field::new("s", SeriesValue::new(vec![point(vec![Field::new("n", 2_i64), Field::new("m", 1_i64)]).into()])),
		]);
		assert!(a.equal(&root(), &b));
		assert_eq!(a.canonical_hash(&root()), b.canonical_hash(&root()));
	}

	#[test]
	fn signed_zero_fields_hash_alike() {
		let positive = point(vec![Field::new("x", 0.0)]);
		let negative = point(vec![Field::new("x", -0.0)]);
		assert!(positive.equal(&root(), &negative));
		assert_eq!(positive.hash(&root()), negative.hash(&root()));
		assert_eq!(positive.canonical_hash(&root()), negative.canonical_hash(&root()));
	}

	#[test]
	fn series_never_shares_a_struct_hash() {
		let pairs: Value = SeriesValue::new(vec![Value::Empty, Value::from(1_i64)]).into();
		let item: Value = point(vec![Field::new("empty", 1_i64)]).into();
		assert!(!pairs.equal(&root(), &item));
		assert_ne!(pairs.hash(&root()), item.hash(&root()));
		assert_ne!(pairs.canonical_hash(&root()), item.canonical_hash(&root()));

		let no_elems: Value = SeriesValue::new(Vec::new()).into();
		let no_fields: Value = point(Vec::new()).into();
		assert_ne!(no_elems.hash(&root()), no_fields.hash(&root()));
	}

	#[test]
	fn empty_struct_hashes_to_empty_blend() {
		assert_eq!(point(Vec::new()).hash(&root()), blend(&[]));
		assert_eq!(point(vec![Field::new("gone", Value::Empty)]).hash(&root()), blend(&[]));
	}
}

mod lookup {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn find_monadic_accepts_empty_name() {
		let item = point(vec![Field::new("x", 1_i64), Field::new("", 2_i64)]);
		let found = item.find_monadic().expect("monadic field");
		assert_eq!(&*found.name, "");
	}

	#[test]
	fn find_monadic_returns_first_flagged_field() {
		let item = point(vec![Field::new("x", 1_i64), Field::monadic("y", 2_i64), Field::new("", 3_i64)]);
		assert_eq!(item.find_monadic().map(|field| &*field.name), Some("y"));
		assert!(point(vec![Field::new("x", 1_i64)]).find_monadic().is_none());
	}

	#[test]
	fn find_by_name_returns_first_occurrence() {
		let item = point(vec![Field::new("a", 1_i64), Field::new("a", 2_i64)]);
		let found = item.find_by_name("a").expect("field a");
		assert!(found.value.equal(&root(), &Value::from(1_i64)));
		assert!(item.find_by_name("b").is_none());
	}

	#[test]
	fn is_empty_counts_raw_fields() {
		assert!(point(Vec::new()).is_empty());
		let ghost = point(vec![Field::new("ghost", Value::Empty)]);
		assert!(!ghost.is_empty());
		assert!(ghost.without_empty_fields().is_empty());
	}

	#[test]
	fn schema_keeps_every_field_in_order() {
		let item = point(vec![Field::new("b", 1_i64), Field::new("a", Value::Empty)]);
		let names: Vec<&str> = item.ty().fields.iter().map(|field| &*field.name).collect();
		assert_eq!(names, ["b", "a"]);
		assert_eq!(item.ty().fields[0].ty, Type::Basic(BasicType::Int64));
		assert_eq!(item.ty().fields[1].ty, Type::Empty);
		assert_eq!(item.without_empty_fields().ty().fields.len(), 1);
	}
}

mod native {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn fields_land_in_mapped_slots() {
		let item = point(vec![Field::new("id", 7_i64), Field::new("Id", "seven"), Field::new("gone", Value::Empty)]);
		let native = item.disassemble_to_native(&root()).expect("disassembles");
		let record = native.as_record().expect("record");

		assert_eq!(record.get("Id"), Some(&NativeValue::Int64(7)));
		assert_eq!(record.get("Id1"), Some(&NativeValue::String("seven".to_owned())));
		assert_eq!(record.get("Gone"), Some(&NativeValue::Absent));
		let order: Vec<&str> = record.iter().map(|(name, _)| name).collect();
		assert_eq!(order, ["Id", "Id1", "Gone"]);

		let source = record.record_type().field("Id1").map(|field| &*field.source_name);
		assert_eq!(source, Some("Id"));
	}

	#[test]
	fn empty_series_field_keeps_zero_value() {
		let item = point(vec![
			Field::new("tags", SeriesValue::new(vec![Value::from("a")])),
			Field::new("none", SeriesValue::new(Vec::new())),
		]);
		let native = item.disassemble_to_native(&root()).expect("disassembles");
		let record = native.as_record().expect("record");
		assert_eq!(record.get("Tags"), Some(&NativeValue::Seq(vec![NativeValue::String("a".to_owned())])));
		assert_eq!(record.get("None"), Some(&NativeValue::Seq(Vec::new())));
	}

	#[test]
	fn duplicate_names_let_last_occurrence_win() {
		let item = point(vec![Field::new("a", 1_i64), Field::new("a", 2_i64)]);
		let native = item.disassemble_to_native(&root()).expect("disassembles");
		let record = native.as_record().expect("record");
		assert_eq!(record.get("A"), Some(&NativeValue::Int64(0)));
		assert_eq!(record.get("A1"), Some(&NativeValue::Int64(2)));
	}

	#[test]
	fn nested_struct_becomes_nested_record() {
		let item = point(vec![Field::new("pos", point(vec![Field::new("x", 1.5)]))]);
		let native = item.disassemble_to_native(&root()).expect("disassembles");
		let json = serde_json::to_value(&native).expect("serializes");
		assert_eq!(json, serde_json::json!({ "Pos": { "X": 1.5 } }));
	}

	#[test]
	fn field_failure_aborts_with_located_error() {
		let item = point(vec![Field::new("ok", 1_i64), Field::new("inner", point(vec![Field::new("handle", opaque("socket"))]))]);
		let root = root();
		let span = root.refine("gate");
		let err = item.disassemble_to_native(&span).expect_err("opaque cannot cross");
		match err {
			EvalError::NotDisassemblable { at, subject } => {
				assert_eq!(at, "/gate/inner/handle");
				assert_eq!(subject, "<socket>");
			}
			other => panic!("unexpected error: {other}"),
		}
	}
}

mod wire {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn empty_fields_are_not_emitted() {
		let item = point(vec![Field::new("a", Value::Empty), Field::new("b", 2_i64)]);
		let wire = item.disassemble_to_wire(&root()).expect("disassembles");
		assert_eq!(
			wire.fields,
			[WireField {
				name: "b".to_owned(),
				monadic: false,
				value: WireValue::Int64 { value: 2 },
			}]
		);
	}

	#[test]
	fn stored_order_and_monadic_flags_are_kept() {
		let item = point(vec![Field::new("z", true), Field::monadic("", "arg")]);
		let wire = item.disassemble_to_wire(&root()).expect("disassembles");
		let summary: Vec<(&str, bool)> = wire.fields.iter().map(|field| (field.name.as_str(), field.monadic)).collect();
		assert_eq!(summary, [("z", false), ("", true)]);
	}

	#[test]
	fn field_failure_aborts() {
		let item = point(vec![Field::new("h", opaque("fd"))]);
		let err = item.disassemble_to_wire(&root()).expect_err("opaque cannot cross");
		assert!(matches!(err, EvalError::NotDisassemblable { .. }));
	}
}

mod terminal {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn augment_fails_with_rendering() {
		let item = point(vec![Field::new("a", 1_i64)]);
		let err = item.augment(&root(), &[Field::new("b", 2_i64)]).expect_err("structs are terminal");
		assert_eq!(err.to_string(), "/: structure (a: 1) cannot be augmented");
	}

	#[test]
	fn invoke_fails_with_rendering() {
		let item = Value::Struct(point(vec![Field::monadic("a", "x")]));
		let err = item.invoke(&root()).expect_err("structs are not callable");
		assert_eq!(err.to_string(), "/: structure (*a: \"x\") cannot be invoked");
	}

	#[test]
	fn lift_wraps_struct_in_singleton_series() {
		let item = point(vec![Field::new("a", 1_i64)]);
		let series = item.lift_to_series(&root());
		assert_eq!(series.len(), 1);
		assert!(series.elems()[0].equal(&root(), &Value::Struct(item.clone())));
		assert_eq!(*series.ty().elem, Type::Struct(item.ty().clone()));
	}
}

#[test]
fn render_uses_stored_unfiltered_order() {
	let item = point(vec![
		Field::new("b", 2_i64),
		Field::new("a", Value::Empty),
		Field::monadic("c", "x"),
		Field::new("", true),
	]);
	assert_eq!(item.to_string(), "(b: 2, a: empty, *c: \"x\", _: true)");
}
