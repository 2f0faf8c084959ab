//! End-to-end traversal of a loan application schema: nested records, a
//! nullable address union, a polymorphic details union, enums, and sparse
//! records.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use fieldtree::schema::parse_str;
use fieldtree::tree::{compile, FieldTree, LeafFn};

const LOAN_APPLICATION_SCHEMA: &str = r#"{
    "type": "record",
    "name": "LoanApplication",
    "fields": [
        { "name": "applicationId", "type": "string" },
        { "name": "createdAt", "type": "long" },
        { "name": "requestedAmount", "type": "double" },
        { "name": "termMonths", "type": "int" },
        { "name": "loanType", "type": {
            "type": "enum",
            "name": "LoanType",
            "symbols": ["AUTO", "MORTGAGE", "PERSONAL"]
        }},
        { "name": "applicant", "type": {
            "type": "record",
            "name": "Applicant",
            "fields": [
                { "name": "applicantId", "type": "string" },
                { "name": "firstName", "type": "string" },
                { "name": "lastName", "type": "string" },
                { "name": "dateOfBirth", "type": "int" },
                { "name": "email", "type": "string" },
                { "name": "phoneNumber", "type": "string" },
                { "name": "annualIncome", "type": "double" },
                { "name": "employmentStatus", "type": {
                    "type": "enum",
                    "name": "EmploymentStatus",
                    "symbols": ["EMPLOYED", "SELF_EMPLOYED", "UNEMPLOYED", "RETIRED"]
                }},
                { "name": "creditScore", "type": "int" },
                { "name": "currentAddress", "type": ["null", {
                    "type": "record",
                    "name": "Address",
                    "fields": [
                        { "name": "line1", "type": "string" },
                        { "name": "line2", "type": ["null", "string"] },
                        { "name": "city", "type": "string" },
                        { "name": "state", "type": "string" },
                        { "name": "postalCode", "type": "string" },
                        { "name": "country", "type": "string" }
                    ]
                }]}
            ]
        }},
        { "name": "details", "type": [
            {
                "type": "record",
                "name": "AutoLoanDetails",
                "fields": [
                    { "name": "vehicleVin", "type": "string" },
                    { "name": "make", "type": "string" },
                    { "name": "model", "type": "string" },
                    { "name": "modelYear", "type": "int" },
                    { "name": "purchasePrice", "type": "double" },
                    { "name": "downPayment", "type": "double" },
                    { "name": "dealerName", "type": "string" },
                    { "name": "newOrUsed", "type": {
                        "type": "enum",
                        "name": "VehicleCondition",
                        "symbols": ["NEW", "USED"]
                    }}
                ]
            },
            {
                "type": "record",
                "name": "MortgageLoanDetails",
                "fields": [
                    { "name": "propertyAddress", "type": "Address" },
                    { "name": "propertyValue", "type": "double" },
                    { "name": "downPayment", "type": "double" }
                ]
            }
        ]}
    ]
}"#;

type CaptureLog = Arc<Mutex<Vec<(String, Value)>>>;

/// Compiles the loan schema with a resolver that captures every invocation
/// as a (path, resolved-value-or-null) pair, in order.
fn capture_tree() -> (FieldTree, CaptureLog) {
    let schema = parse_str(LOAN_APPLICATION_SCHEMA).expect("schema should parse");
    let log: CaptureLog = Arc::new(Mutex::new(Vec::new()));
    let tree = compile(&schema, |_path| {
        let log = Arc::clone(&log);
        Some(Box::new(move |_parent: Option<&Value>, path: &str, value: Option<&Value>| {
            log.lock()
                .unwrap()
                .push((path.to_string(), value.cloned().unwrap_or(Value::Null)));
        }) as LeafFn)
    })
    .expect("root schema is a record");
    (tree, log)
}

fn auto_loan_record() -> Value {
    json!({
        "applicationId": "APP-123",
        "createdAt": 1_700_000_000_000i64,
        "requestedAmount": 25000.0,
        "termMonths": 60,
        "loanType": "AUTO",
        "applicant": {
            "applicantId": "APPL-1",
            "firstName": "Jane",
            "lastName": "Doe",
            "dateOfBirth": 15000,
            "email": "jane.doe@example.com",
            "phoneNumber": "555-1234",
            "annualIncome": 120000.0,
            "employmentStatus": "EMPLOYED",
            "creditScore": 750,
            "currentAddress": {
                "line1": "123 Main St",
                "line2": null,
                "city": "Springfield",
                "state": "OH",
                "postalCode": "43001",
                "country": "US"
            }
        },
        "details": {
            "vehicleVin": "1FTFW1E89AKD12345",
            "make": "Ford",
            "model": "F-150",
            "modelYear": 2023,
            "purchasePrice": 45000.0,
            "downPayment": 5000.0,
            "dealerName": "Awesome Ford Dealer",
            "newOrUsed": "NEW"
        }
    })
}

fn as_map(log: &CaptureLog) -> HashMap<String, Value> {
    log.lock().unwrap().iter().cloned().collect()
}

#[test]
fn executes_leaf_callbacks_for_auto_loan() {
    let (tree, log) = capture_tree();
    tree.execute(&auto_loan_record());

    let values = as_map(&log);
    assert!(!values.is_empty(), "no leaf callbacks were invoked");
    assert_eq!(values["LoanApplication.applicationId"], json!("APP-123"));
    assert_eq!(values["LoanApplication.loanType"], json!("AUTO"));
    assert_eq!(values["LoanApplication.applicant.firstName"], json!("Jane"));
    assert_eq!(values["LoanApplication.applicant.lastName"], json!("Doe"));
    assert_eq!(
        values["LoanApplication.applicant.currentAddress.line1"],
        json!("123 Main St")
    );
    assert_eq!(
        values["LoanApplication.applicant.currentAddress.city"],
        json!("Springfield")
    );
    assert_eq!(
        values["LoanApplication.details.vehicleVin"],
        json!("1FTFW1E89AKD12345")
    );
    assert_eq!(values["LoanApplication.details.make"], json!("Ford"));
    assert_eq!(values["LoanApplication.details.model"], json!("F-150"));
    assert_eq!(values["LoanApplication.details.newOrUsed"], json!("NEW"));
}

#[test]
fn compiles_unions_structurally() {
    let (tree, _log) = capture_tree();
    let paths = tree.leaf_paths();

    // nullable Address union compiles to an internal node with leaf children
    assert!(paths.contains(&"LoanApplication.applicant.currentAddress.line1"));
    assert!(!paths.contains(&"LoanApplication.applicant.currentAddress"));

    // polymorphic details union is classified by its first branch only
    assert!(paths.contains(&"LoanApplication.details.vehicleVin"));
    assert!(!paths.contains(&"LoanApplication.details.propertyValue"));
}

#[test]
fn sparse_record_resolves_missing_structure_to_null() {
    let (tree, log) = capture_tree();
    tree.execute(&json!({
        "applicationId": "APP-456",
        "termMonths": 12
    }));

    let values = as_map(&log);
    assert_eq!(values["LoanApplication.applicationId"], json!("APP-456"));
    assert_eq!(values["LoanApplication.termMonths"], json!(12));
    assert_eq!(values["LoanApplication.applicant.firstName"], Value::Null);
    assert_eq!(
        values["LoanApplication.applicant.currentAddress.city"],
        Value::Null
    );
    assert_eq!(values["LoanApplication.details.vehicleVin"], Value::Null);
}

#[test]
fn explicitly_null_address_still_visits_descendants() {
    let (tree, log) = capture_tree();
    let mut record = auto_loan_record();
    record["applicant"]["currentAddress"] = Value::Null;
    tree.execute(&record);

    let values = as_map(&log);
    assert_eq!(
        values["LoanApplication.applicant.currentAddress.line1"],
        Value::Null
    );
    assert_eq!(
        values["LoanApplication.applicant.currentAddress.country"],
        Value::Null
    );
    // sibling fields are unaffected
    assert_eq!(values["LoanApplication.applicant.creditScore"], json!(750));
}

#[test]
fn every_attached_callback_fires_exactly_once_per_execute() {
    let (tree, log) = capture_tree();
    tree.execute(&auto_loan_record());

    let invoked: Vec<String> = log.lock().unwrap().iter().map(|(p, _)| p.clone()).collect();
    let expected: Vec<String> = tree.leaf_paths().iter().map(|p| p.to_string()).collect();
    assert_eq!(invoked, expected);

    // a second execute repeats the exact same sequence
    tree.execute(&auto_loan_record());
    let invoked: Vec<String> = log.lock().unwrap().iter().map(|(p, _)| p.clone()).collect();
    let doubled: Vec<String> = expected.iter().chain(expected.iter()).cloned().collect();
    assert_eq!(invoked, doubled);
}

#[test]
fn callbacks_fire_in_declaration_order_depth_first() {
    let (tree, log) = capture_tree();
    tree.execute(&auto_loan_record());

    let invoked: Vec<String> = log.lock().unwrap().iter().map(|(p, _)| p.clone()).collect();
    let first_applicant = invoked
        .iter()
        .position(|p| p.starts_with("LoanApplication.applicant."))
        .unwrap();
    let first_details = invoked
        .iter()
        .position(|p| p.starts_with("LoanApplication.details."))
        .unwrap();

    assert_eq!(invoked[0], "LoanApplication.applicationId");
    assert!(first_applicant < first_details);
    // depth-first: all applicant leaves precede any details leaf
    assert!(invoked[first_applicant..first_details]
        .iter()
        .all(|p| p.starts_with("LoanApplication.applicant.")));
}
