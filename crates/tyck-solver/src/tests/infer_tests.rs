use super::shape_ty;
use crate::{TemplateType, Type, Variance};

fn template(name: &str) -> crate::Ty {
    Type::template(TemplateType::new(name))
}

#[test]
fn test_template_binds_received_type_directly() {
    let map = template("T").infer_template_types(&Type::int());
    assert_eq!(map.len(), 1);
    assert!(map.get("T").unwrap().equals(&Type::Int));
}

#[test]
fn test_shape_infers_through_matching_properties() {
    let expected = shape_ty(&[("a", template("T"))], &[]);
    let received = shape_ty(&[("a", Type::int())], &[]);

    let map = expected.infer_template_types(&received);
    assert!(map.get("T").unwrap().equals(&Type::Int));
}

#[test]
fn test_shape_inference_silently_skips_absent_properties() {
    let expected = shape_ty(&[("a", template("T")), ("b", template("U"))], &[]);
    let received = shape_ty(&[("a", Type::string())], &[]);

    let map = expected.infer_template_types(&received);
    assert_eq!(map.len(), 1);
    assert!(map.get("T").unwrap().equals(&Type::String));
    assert!(map.get("U").is_none());
}

#[test]
fn test_conflicting_bindings_are_joined_into_a_union() {
    let expected = shape_ty(&[("a", template("T")), ("b", template("T"))], &[]);
    let received = shape_ty(&[("a", Type::int()), ("b", Type::string())], &[]);

    let map = expected.infer_template_types(&received);
    assert_eq!(map.len(), 1);
    assert!(map
        .get("T")
        .unwrap()
        .equals(&Type::Union(vec![Type::int(), Type::string()])));
}

#[test]
fn test_identical_bindings_stay_unmerged() {
    let expected = shape_ty(&[("a", template("T")), ("b", template("T"))], &[]);
    let received = shape_ty(&[("a", Type::int()), ("b", Type::int())], &[]);

    let map = expected.infer_template_types(&received);
    assert!(map.get("T").unwrap().equals(&Type::Int));
}

#[test]
fn test_union_received_distributes_over_branches() {
    let expected = shape_ty(&[("a", template("T"))], &[]);
    let received = Type::union(vec![
        shape_ty(&[("a", Type::int())], &[]),
        shape_ty(&[("a", Type::string())], &[]),
    ]);

    let map = expected.infer_template_types(&received);
    assert!(map
        .get("T")
        .unwrap()
        .equals(&Type::Union(vec![Type::int(), Type::string()])));
}

#[test]
fn test_non_shape_received_yields_empty_map() {
    let expected = shape_ty(&[("a", template("T"))], &[]);
    assert!(expected.infer_template_types(&Type::int()).is_empty());
    assert!(expected.infer_template_types(&Type::mixed()).is_empty());
}

#[test]
fn test_referenced_templates_compose_with_covariant_reads() {
    let shape = shape_ty(&[("x", template("T"))], &[]);

    let covariant = shape.referenced_template_types(Variance::COVARIANT);
    assert_eq!(covariant.len(), 1);
    assert_eq!(covariant[0].template().name(), "T");
    assert!(covariant[0].variance().is_covariant());

    // A contravariant ambient position flips the covariant property read.
    let contravariant = shape.referenced_template_types(Variance::CONTRAVARIANT);
    assert!(contravariant[0].variance().is_contravariant());

    let invariant = shape.referenced_template_types(Variance::INVARIANT);
    assert!(invariant[0].variance().is_invariant());
}

#[test]
fn test_variance_composition_sign_table() {
    use Variance as V;
    assert_eq!(V::COVARIANT.compose(V::COVARIANT), V::COVARIANT);
    assert_eq!(V::COVARIANT.compose(V::CONTRAVARIANT), V::CONTRAVARIANT);
    assert_eq!(V::CONTRAVARIANT.compose(V::COVARIANT), V::CONTRAVARIANT);
    assert_eq!(V::CONTRAVARIANT.compose(V::CONTRAVARIANT), V::COVARIANT);
    assert_eq!(V::INVARIANT.compose(V::COVARIANT), V::INVARIANT);
    assert_eq!(V::COVARIANT.compose(V::INVARIANT), V::INVARIANT);
}

#[test]
fn test_nested_shapes_propagate_variance() {
    let inner = shape_ty(&[("y", template("T"))], &[]);
    let outer = shape_ty(&[("x", inner)], &[]);

    let references = outer.referenced_template_types(Variance::COVARIANT);
    assert_eq!(references.len(), 1);
    assert!(references[0].variance().is_covariant());
}
