use catalogist::catalog::ProductDraft;
use catalogist::validation::{check_price, check_title};

fn valid_draft() -> ProductDraft {
    ProductDraft {
        title: "Backpack".to_string(),
        price: 109.95,
        description: "Your perfect pack for everyday use".to_string(),
        category: "men's clothing".to_string(),
    }
}

#[test]
fn accepts_a_complete_draft() {
    assert!(valid_draft().validate().is_ok());
}

#[test]
fn accepts_the_minimum_price() {
    let draft = ProductDraft {
        price: 0.01,
        ..valid_draft()
    };
    assert!(draft.validate().is_ok());
}

#[test]
fn rejects_a_zero_price() {
    let draft = ProductDraft {
        price: 0.0,
        ..valid_draft()
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.violations.len(), 1);
    assert_eq!(errors.violations[0].field, "price");
    assert_eq!(errors.violations[0].message, "Price must be greater than 0");
}

#[test]
fn rejects_a_negative_price() {
    let draft = ProductDraft {
        price: -5.0,
        ..valid_draft()
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.violations[0].message, "Price cannot be negative");
}

#[test]
fn rejects_a_non_numeric_price() {
    assert_eq!(check_price(f64::NAN).unwrap().message, "Price must be a number");
    assert_eq!(check_price(f64::INFINITY).unwrap().message, "Price must be a number");
}

#[test]
fn rejects_an_empty_title() {
    let draft = ProductDraft {
        title: String::new(),
        ..valid_draft()
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.violations[0].field, "title");
    assert_eq!(errors.violations[0].message, "Title is required");
}

#[test]
fn title_length_limit_is_one_hundred_characters() {
    assert!(check_title(&"x".repeat(100)).is_none());
    let violation = check_title(&"x".repeat(101)).unwrap();
    assert_eq!(violation.message, "Title must be at most 100 characters");
}

#[test]
fn collects_all_violations_in_field_order() {
    let draft = ProductDraft {
        title: String::new(),
        price: 0.0,
        description: String::new(),
        category: String::new(),
    };

    let errors = draft.validate().unwrap_err();
    let fields: Vec<&str> = errors.violations.iter().map(|v| v.field).collect();
    assert_eq!(fields, vec!["title", "price", "description", "category"]);
}

#[test]
fn violations_render_as_a_readable_message() {
    let draft = ProductDraft {
        title: String::new(),
        ..valid_draft()
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.to_string(), "title: Title is required");
}
