//! Snapshot tests for Java code generation.
//!
//! These tests verify that the generated Java code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use eventmill_codegen::{
    generation::{NamespaceMode, ProjectMode},
    pipeline::Pipeline,
};
use eventmill_codegen_java::{Generator, GeneratorOptions, LanguageCodegen};
use tempfile::TempDir;

const ORDERS: &str = include_str!("../../mill-model/tests/fixtures/orders.json");

fn options() -> GeneratorOptions {
    GeneratorOptions {
        namespace: NamespaceMode::Majority,
        project_mode: ProjectMode::CreateNew,
        ..Default::default()
    }
}

/// Generate code from a model and return files in emission order.
fn generate_files(json: &str) -> Vec<(String, String)> {
    let parsed = eventmill_model::parse_str(json).expect("Failed to parse model");
    let ctx = Pipeline::new().run(parsed).expect("Pipeline failed");
    let generator = Generator::from_context(&ctx, options());
    generator
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_file_layout() {
    let files = generate_files(ORDERS);
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();

    assert_eq!(
        paths,
        [
            "Orders/src/orders/orders/schemas/Order.java",
            "Orders/src/orders/orders/schemas/OrderObject.java",
            "Orders/src/orders/orders/events/OrderPlaced.java",
            "Orders/src/orders/orders/schemas/PlaceOrder.java",
            "Orders/src/orders/orders/schemas/Customer.java",
            "Orders/src/orders/orders/commands/PlaceOrder.java",
            "Orders/src/orders/orders/commands/CapturePayment.java",
            "Orders/src/orders/orders/schemas/Summary.java",
            "Orders/src/orders/orders/readModels/OrderSummary.java",
            "Payments/src/orders/payments/schemas/Currency.java",
            "Payments/src/orders/payments/events/PaymentCaptured.java",
            "Payments/src/orders/payments/commands/CapturePayment.java",
            "DefaultStream/src/orders/defaultStream/events/OrderArchived.java",
            "DefaultStream/src/orders/defaultStream/commands/CancelOrder.java",
        ]
    );
}

#[test]
fn test_event_record() {
    let files = generate_files(ORDERS);
    let event = get_file(&files, "Orders/src/orders/orders/events/OrderPlaced.java")
        .expect("OrderPlaced.java not found");

    insta::assert_snapshot!(event, @r#"
    package orders.orders.events;

    import java.util.List;
    import java.util.Set;
    import java.util.UUID;

    import orders.orders.schemas.OrderObject;

    /**
     * A customer placed an order
     *
     * Property: aggregate - true
     */
    public final class OrderPlaced {
    	public static final String EMAIL_REGEX = "^[^@\\s]+@[^@\\s]+$";

    	private final UUID orderId;
    	private final String email;
    	private final OrderEnum status;
    	private final List<OrderObject> items;
    	private final Set<String> tags;

    	public enum OrderEnum {
    		OPEN, SHIPPED
    	}

    	public OrderPlaced(UUID orderId, String email, OrderEnum status, List<OrderObject> items, Set<String> tags) {
    		this.orderId = orderId;
    		this.email = email;
    		this.status = status;
    		this.items = items;
    		this.tags = tags;
    	}

    	public UUID getOrderId() {
    		return orderId;
    	}

    	public String getEmail() {
    		return email;
    	}

    	public OrderEnum getStatus() {
    		return status;
    	}

    	public List<OrderObject> getItems() {
    		return items;
    	}

    	public Set<String> getTags() {
    		return tags;
    	}

    	@Override
    	public String toString() {
    		return "OrderPlaced [orderId=" + orderId + ", email=" + email + ", status=" + status + ", items=" + items + ", tags=" + tags + "]";
    	}
    }
    "#);
}

#[test]
fn test_nested_schema_entity() {
    let files = generate_files(ORDERS);
    let entity = get_file(&files, "Orders/src/orders/orders/schemas/OrderObject.java")
        .expect("OrderObject.java not found");

    insta::assert_snapshot!(entity, @r#"
    package orders.orders.schemas;

    public class OrderObject {
    	private String sku;
    	private int quantity; // min - 1

    	public OrderObject() {
    	}

    	public OrderObject(String sku, int quantity) {
    		this.sku = sku;
    		this.quantity = quantity;
    	}

    	public String getSku() {
    		return sku;
    	}

    	public void setSku(String sku) {
    		this.sku = sku;
    	}

    	public int getQuantity() {
    		return quantity;
    	}

    	public void setQuantity(int quantity) {
    		this.quantity = quantity;
    	}

    	@Override
    	public String toString() {
    		return "OrderObject [sku=" + sku + ", quantity=" + quantity + "]";
    	}
    }
    "#);
}

#[test]
fn test_command_without_stream_joins_context() {
    let files = generate_files(ORDERS);
    let command = get_file(&files, "Orders/src/orders/orders/commands/PlaceOrder.java")
        .expect("PlaceOrder.java not found");

    assert!(command.contains("import orders.orders.schemas.Customer;\n"));
    assert!(command.contains("public final class PlaceOrder {\n"));
    assert!(command.contains("\tprivate final Customer customer;\n"));
    assert!(!command.contains("public void set"));
}

#[test]
fn test_referenced_entity_takes_note_description() {
    let files = generate_files(ORDERS);
    let customer = get_file(&files, "Orders/src/orders/orders/schemas/Customer.java")
        .expect("Customer.java not found");

    // Place Order has no description, so neither has the entity it references
    assert!(customer.starts_with("package orders.orders.schemas;\n\npublic class Customer {\n"));
    assert!(!customer.contains("Who ordered"));
}

#[test]
fn test_non_map_root_is_wrapped() {
    let files = generate_files(ORDERS);
    let command = get_file(&files, "Orders/src/orders/orders/commands/CapturePayment.java")
        .expect("CapturePayment.java not found");

    insta::assert_snapshot!(command, @r#"
    package orders.orders.commands;

    /**
     * Charge the customer
     */
    public final class CapturePayment {
    	private final double Amount;

    	public CapturePayment(double Amount) {
    		this.Amount = Amount;
    	}

    	public double getAmount() {
    		return Amount;
    	}

    	@Override
    	public String toString() {
    		return "CapturePayment [Amount=" + Amount + "]";
    	}
    }
    "#);
}

#[test]
fn test_read_model_nesting() {
    let files = generate_files(ORDERS);
    let summary = get_file(&files, "Orders/src/orders/orders/readModels/OrderSummary.java")
        .expect("OrderSummary.java not found");

    assert!(summary.starts_with(
        "package orders.orders.readModels;\n\nimport java.util.List;\nimport java.util.Map;\nimport java.util.UUID;\n\n"
    ));
    assert!(summary.contains("\tprivate List<Map<UUID, Integer>> quantities;\n"));
    assert!(summary.contains("\tprivate double total;\n"));
    assert!(summary.contains("\tpublic OrderSummary() {\n\t}\n"));
    assert!(summary.contains("\tpublic void setQuantities(List<Map<UUID, Integer>> quantities) {\n"));
}

#[test]
fn test_reference_to_enum_emits_enum_file() {
    let files = generate_files(ORDERS);
    let currency = get_file(&files, "Payments/src/orders/payments/schemas/Currency.java")
        .expect("Currency.java not found");

    insta::assert_snapshot!(currency, @r"
    package orders.payments.schemas;

    /**
     * Money was received
     */
    public enum Currency {
    	A, B, C
    }
    ");

    let event = get_file(&files, "Payments/src/orders/payments/events/PaymentCaptured.java")
        .expect("PaymentCaptured.java not found");
    assert!(event.contains("import orders.payments.schemas.Currency;\n"));
    assert!(event.contains("\tprivate final Currency PaymentCurrency;\n"));
    assert!(!event.contains("public enum"));
}

#[test]
fn test_default_stream() {
    let files = generate_files(ORDERS);

    let archived = get_file(&files, "DefaultStream/src/orders/defaultStream/events/OrderArchived.java")
        .expect("OrderArchived.java not found");
    assert_eq!(
        archived,
        "package orders.defaultStream.events;\n\npublic final class OrderArchived {\n}\n"
    );

    // Declares two schemas: the schema is dropped, the class is still emitted
    let cancel = get_file(&files, "DefaultStream/src/orders/defaultStream/commands/CancelOrder.java")
        .expect("CancelOrder.java not found");
    insta::assert_snapshot!(cancel, @r"
    package orders.defaultStream.commands;

    public final class CancelOrder {
    }
    ");
}

#[test]
fn test_explicit_namespace_and_existing_project() {
    let parsed = eventmill_model::parse_str(ORDERS).unwrap();
    let generator = Generator::new(
        &parsed.model,
        GeneratorOptions {
            namespace: NamespaceMode::Explicit("com.acme".into()),
            project_mode: ProjectMode::UseExisting,
            ..Default::default()
        },
    );

    let files = generator.preview();

    assert_eq!(files[0].path, "com/acme/orders/schemas/Order.java");
    assert!(files[0].content.starts_with("package com.acme.orders.schemas;\n"));
}

#[test]
fn test_generate_is_idempotent() {
    let parsed = eventmill_model::parse_str(ORDERS).unwrap();
    let generator = Generator::new(
        &parsed.model,
        GeneratorOptions {
            project_mode: ProjectMode::UseExisting,
            ..options()
        },
    );
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = generator.generate(first.path()).unwrap();
    let b = generator.generate(second.path()).unwrap();

    assert!(a.is_success());
    assert_eq!(a.written, b.written);
    assert_eq!(a.skipped_contexts, vec!["Shipping"]);
    for path in &a.written {
        assert_eq!(
            fs::read(first.path().join(path)).unwrap(),
            fs::read(second.path().join(path)).unwrap(),
            "{} differs",
            path.display()
        );
    }
}

#[test]
fn test_generate_writes_every_previewed_file() {
    let parsed = eventmill_model::parse_str(ORDERS).unwrap();
    let generator = Generator::new(&parsed.model, options());
    let temp = TempDir::new().unwrap();

    let result = generator.generate(temp.path()).unwrap();
    let preview = generator.preview();

    assert_eq!(result.written.len(), preview.len());
    for file in preview {
        let written = fs::read_to_string(temp.path().join(&file.path)).unwrap();
        assert_eq!(written, file.content, "{}", file.path);
    }
}
