use specula_meta::{
    AssemblyInfo, ConstructorDefinition, FieldDefinition, MemberInfo, MemberKind, MetaError,
    MethodDefinition, PropertyDefinition, Reflect, TypeBuilder, TypeInfo, TypeRef,
};

struct Account;
struct SavingsAccount;
struct Loan;

impl Reflect for Account {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("Account")
            .assembly("bank")
            .field(FieldDefinition::new("number", TypeRef::of::<String>()).as_readonly())
            .field(FieldDefinition::new("BANK_CODE", TypeRef::of::<u32>()).as_static())
            .property(PropertyDefinition::new("balance", TypeRef::of::<f64>()).read_only())
            .method(
                MethodDefinition::new("deposit")
                    .param("amount", TypeRef::of::<f64>())
                    .returns(TypeRef::of::<bool>()),
            )
            .constructor(ConstructorDefinition::new().param("number", TypeRef::of::<String>()))
            .build()
    }
}

impl Reflect for SavingsAccount {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("SavingsAccount")
            .assembly("bank")
            .base::<Account>()
            .field(FieldDefinition::new("rate", TypeRef::of::<f64>()))
            .build()
    }
}

impl Reflect for Loan {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("Loan")
            .assembly("bank")
            .field(FieldDefinition::new("principal", TypeRef::of::<f64>()))
            .build()
    }
}

fn round_trip(assembly: &AssemblyInfo) -> AssemblyInfo {
    let json = serde_json::to_string(assembly).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_descriptions_are_rebuilt_equal() {
    assert_eq!(Account::type_info(), Account::type_info());
    assert_eq!(
        Account::type_info().get_field("number"),
        Account::type_info().get_field("number")
    );
}

#[test]
fn test_inherited_members_resolve_to_ancestor() {
    let savings = SavingsAccount::type_info();

    let number = savings.get_field("number").unwrap();
    assert_eq!(number, Account::type_info().declared_field("number").unwrap());
    assert_eq!(number.declaring_type, TypeRef::of::<Account>());

    let balance = savings.get_data_member("balance").unwrap();
    assert_eq!(balance.kind(), MemberKind::Property);

    let deposit = savings.get_methods("deposit");
    assert_eq!(deposit.len(), 1);
    assert_eq!(deposit[0].parameters[0].name, "amount");

    // constructors are not inherited
    assert!(savings.constructors.is_empty());
}

#[test]
fn test_assembly_of_reflected_types() {
    let assembly = AssemblyInfo::new("bank")
        .with_type::<Account>()
        .and_then(|a| a.with_type::<SavingsAccount>())
        .unwrap();

    let savings = assembly.get_type("SavingsAccount").unwrap();
    assert!(savings.is_subclass_of(&TypeRef::of::<Account>()));
}

#[test]
fn test_member_handle_json_shape() {
    let field = MemberInfo::from(Account::type_info().get_field("number").unwrap().clone());
    let json = serde_json::to_value(&field).unwrap();

    assert_eq!(json["Field"]["name"], "number");
    assert_eq!(json["Field"]["declaring_type"]["assembly"], "bank");
    assert_eq!(json["Field"]["is_readonly"], true);

    let back: MemberInfo = serde_json::from_value(json).unwrap();
    assert_eq!(back, field);
}

#[test]
fn test_deserialized_assembly_lookup() {
    let assembly = AssemblyInfo::new("bank").with_type::<Account>().unwrap();
    let json = serde_json::to_string(&assembly).unwrap();
    let back: AssemblyInfo = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name(), "bank");
    assert!(back.contains("Account"));
    assert_eq!(back.get_type("Account").unwrap().fields.len(), 2);
}

#[test]
fn test_deserialized_assembly_rejects_duplicates() {
    let mut back = round_trip(&AssemblyInfo::new("bank").with_type::<Account>().unwrap());

    let err = back.add_type(Account::type_info()).unwrap_err();
    assert_eq!(
        err,
        MetaError::DuplicateType {
            assembly: "bank".to_string(),
            name: "Account".to_string(),
        }
    );
    assert_eq!(back.len(), 1);
}

#[test]
fn test_deserialized_assembly_keeps_old_types_after_adding() {
    let mut back = round_trip(&AssemblyInfo::new("bank").with_type::<Account>().unwrap());

    assert_eq!(back.add_type(Loan::type_info()).unwrap(), 1);
    assert!(back.contains("Account"));
    assert!(back.contains("Loan"));
    assert_eq!(back.get_type("Account").unwrap(), &Account::type_info());
}

#[test]
fn test_duplicate_types_in_json_fail_to_load() {
    let account = serde_json::to_value(Account::type_info()).unwrap();
    let json = serde_json::json!({ "name": "bank", "types": [account.clone(), account] });

    let err = serde_json::from_value::<AssemblyInfo>(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate type `Account`"));
}
