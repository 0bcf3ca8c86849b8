mod common;

use common::{Calculator, ClassWithFields, ClassWithProperties, TypeWithProperties, Uri};
use specula_meta::{member::CONSTRUCTOR_NAME, Reflect, TypeRef};
use specula_select::{
    Constructors, Expr, Methods, Parameters, Properties, Selector, ShapeError,
    StaticConstructors, StaticMethods, StaticParameters, StaticProperties, StaticSelector,
};

#[test]
fn test_select_property() {
    let actual = Properties::<ClassWithProperties>::new()
        .select(&Selector::new(|x| x.member("read_only_text")))
        .unwrap();

    assert_eq!(
        &actual,
        ClassWithProperties::type_info()
            .get_property("read_only_text")
            .unwrap()
    );
    assert!(!actual.can_write);
}

#[test]
fn test_select_field_as_property_fails() {
    let err = Properties::<ClassWithFields>::new()
        .select(&Selector::new(|x| x.member("read_only_text")))
        .unwrap_err();
    assert!(err.is_wrong_kind());
}

#[test]
fn test_select_static_property() {
    let actual = StaticProperties::new()
        .select(&StaticSelector::new(
            Expr::type_of::<TypeWithProperties>().member("PROPERTY"),
        ))
        .unwrap();
    assert_eq!(actual.declaring_type, TypeRef::of::<TypeWithProperties>());
}

#[test]
fn test_select_method_by_argument_types() {
    let sut = Methods::<Calculator>::new();

    let float_add = sut
        .select(&Selector::new(|x| {
            x.call("add", vec![Expr::constant(1.0), Expr::constant(2.0)])
        }))
        .unwrap();
    assert_eq!(float_add.return_type, TypeRef::of::<f64>());

    let int_add = sut
        .select(&Selector::new(|x| {
            x.call("add", vec![Expr::constant(1), Expr::constant(2)])
        }))
        .unwrap();
    assert_eq!(int_add.return_type, TypeRef::of::<i64>());

    // arguments without a known type match any overload of the right arity
    let first = sut
        .select(&Selector::new(|x| {
            let memory = x.clone().member("memory");
            x.call("add", vec![memory.clone(), memory])
        }))
        .unwrap();
    assert_eq!(first, float_add);
}

#[test]
fn test_select_method_on_member_access_fails() {
    let err = Methods::<Calculator>::new()
        .select(&Selector::new(|x| x.member("memory")))
        .unwrap_err();
    assert!(matches!(
        err.shape(),
        Some(ShapeError::NotMemberAccess { node: "member access", .. })
    ));
}

#[test]
fn test_select_field_called_as_method_fails() {
    let err = Methods::<Calculator>::new()
        .select(&Selector::new(|x| x.call("memory", vec![])))
        .unwrap_err();
    assert!(err.is_wrong_kind());
}

#[test]
fn test_select_static_method() {
    let actual = StaticMethods::new()
        .select(&StaticSelector::new(
            Expr::type_of::<Uri>().call("parse", vec![Expr::constant("a"), Expr::constant(true)]),
        ))
        .unwrap();
    assert!(actual.is_static);
    assert_eq!(actual.arity(), 2);
}

#[test]
fn test_select_constructor_overload() {
    let text_ctor = StaticConstructors::new()
        .select(&StaticSelector::new(Expr::new_object::<Uri>(vec![
            Expr::constant("http://example.org"),
        ])))
        .unwrap();
    assert_eq!(text_ctor.arity(), 1);
    assert_eq!(text_ctor.declaring_type, TypeRef::of::<Uri>());

    let relative = StaticConstructors::new()
        .select(&StaticSelector::new(Expr::new_object::<Uri>(vec![
            Expr::new_object::<Uri>(vec![Expr::constant("http://example.org")]),
            Expr::constant("index.html"),
        ])))
        .unwrap();
    assert_eq!(relative.parameters[0].name, "base");
}

#[test]
fn test_select_constructor_reading_carrier() {
    let ctor = Constructors::<ClassWithFields>::new()
        .select(&Selector::new(|x| {
            Expr::new_object::<Uri>(vec![x.member("read_only_text")])
        }))
        .unwrap();
    assert_eq!(ctor.parameters[0].name, "text");
}

#[test]
fn test_select_missing_constructor_fails() {
    let err = StaticConstructors::new()
        .select(&StaticSelector::new(Expr::new_object::<Calculator>(vec![
            Expr::constant(1),
        ])))
        .unwrap_err();
    assert_eq!(
        err.shape(),
        Some(&ShapeError::NoMatchingOverload {
            ty: TypeRef::of::<Calculator>(),
            member: CONSTRUCTOR_NAME.to_string(),
            arity: 1,
        })
    );
}

#[test]
fn test_select_parameters() {
    let rhs = Parameters::<Calculator>::new()
        .select(
            &Selector::new(|x| x.call("add", vec![Expr::constant(1), Expr::constant(2)])),
            1,
        )
        .unwrap();
    assert_eq!(rhs.name, "rhs");
    assert_eq!(rhs.member, "add");
    assert_eq!(rhs.parameter_type, TypeRef::of::<i64>());

    let strict = StaticParameters::new()
        .select(
            &StaticSelector::new(Expr::type_of::<Uri>().call(
                "parse",
                vec![Expr::constant("a"), Expr::constant(false)],
            )),
            1,
        )
        .unwrap();
    assert!(strict.is_optional);

    let text = StaticParameters::new()
        .select(
            &StaticSelector::new(Expr::new_object::<Uri>(vec![Expr::constant("a")])),
            0,
        )
        .unwrap();
    assert_eq!(text.member, CONSTRUCTOR_NAME);
}

#[test]
fn test_select_parameter_out_of_range() {
    let err = Parameters::<Calculator>::new()
        .select(&Selector::new(|x| x.call("clear", vec![])), 0)
        .unwrap_err();
    assert_eq!(
        err.shape(),
        Some(&ShapeError::ParameterOutOfRange {
            member: "clear".to_string(),
            position: 0,
            count: 0,
        })
    );
}

#[test]
fn test_null_selectors_fail_for_every_kind() {
    assert!(Properties::<Calculator>::new().select(None).unwrap_err().is_null_argument());
    assert!(Methods::<Calculator>::new().select(None).unwrap_err().is_null_argument());
    assert!(Constructors::<Calculator>::new().select(None).unwrap_err().is_null_argument());
    assert!(Parameters::<Calculator>::new().select(None, 0).unwrap_err().is_null_argument());
    assert!(StaticMethods::new().select(None).unwrap_err().is_null_argument());
    assert!(StaticParameters::new().select(None, 0).unwrap_err().is_null_argument());
}
