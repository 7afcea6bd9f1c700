//! Model service wired to the DuckDB store.

use std::sync::Arc;

use objdict_core::entities::{FieldRecord, ModelRecord, UserRecord};
use objdict_core::enums::EntityKind;
use objdict_core::views::ModelView;
use objdict_core::{CommandRepository, Conditions};
use objdict_db::{DatabaseError, ObjDictDb, Repository};
use objdict_service::{CodeService, GenericService, ModelService};
use pretty_assertions::assert_eq;
use uuid::Uuid;

type DbModelService = ModelService<
    Repository<ModelRecord>,
    Repository<ModelRecord>,
    Repository<FieldRecord>,
    Repository<UserRecord>,
>;

struct Fixture {
    db: Arc<ObjDictDb>,
    service: DbModelService,
}

impl Fixture {
    fn new() -> Self {
        let db = Arc::new(ObjDictDb::open_in_memory().unwrap());
        let service = ModelService::new(
            db.repository(),
            db.repository(),
            db.repository(),
            db.repository(),
        );
        Self { db, service }
    }

    fn user(&self, name: &str) -> UserRecord {
        let user = UserRecord::new(name, Some(format!("{}@example.com", name.to_lowercase()))).unwrap();
        self.db.repository::<UserRecord>().create(&user).unwrap();
        user
    }

    fn model(&self, name: &str, owner: &UserRecord) -> ModelRecord {
        let model = ModelRecord::new(name, owner.id, None).unwrap();
        self.service.create(&ModelView::from(model.clone())).unwrap();
        model
    }

    fn field(&self, model: &ModelRecord, name: &str, type_name: &str) -> FieldRecord {
        let field = FieldRecord::new(model.id, name, type_name).unwrap();
        self.db.repository::<FieldRecord>().create(&field).unwrap();
        field
    }
}

#[test]
fn invoice_aggregate_and_class_definition() {
    let fx = Fixture::new();
    let alice = fx.user("Alice");
    let invoice = fx.model("Invoice", &alice);
    fx.field(&invoice, "Amount", "decimal");
    fx.field(&invoice, "Currency", "string");

    let view = fx.service.get_by_id(&invoice.id).unwrap();
    assert_eq!(view.name, "Invoice");
    let fields: Vec<_> = view.fields.iter().map(|f| (f.name.as_str(), f.type_name.as_str())).collect();
    assert_eq!(fields, [("Amount", "decimal"), ("Currency", "string")]);
    let user = view.user.as_ref().unwrap();
    assert_eq!((user.id, user.name.as_str()), (alice.id, "Alice"));

    assert_eq!(
        fx.service.get_class_definition(&view),
        "public class Invoice\r\n{\r\n    public decimal Amount { get; set; }\r\n\r\n    public string Currency { get; set; }\r\n}"
    );
}

#[test]
fn aggregate_holds_exactly_the_models_fields() {
    let fx = Fixture::new();
    let alice = fx.user("Alice");
    let invoice = fx.model("Invoice", &alice);
    let order = fx.model("Order", &alice);
    let amount = fx.field(&invoice, "Amount", "decimal");
    fx.field(&order, "Lines", "List<OrderLine>");
    let currency = fx.field(&invoice, "Currency", "string");

    let view = fx.service.get_by_id(&invoice.id).unwrap();
    let ids: Vec<Uuid> = view.fields.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![amount.id, currency.id]);
    assert!(view.fields.iter().all(|f| f.model_id == invoice.id));
}

#[test]
fn model_without_fields_renders_empty_class() {
    let fx = Fixture::new();
    let bob = fx.user("Bob");
    let empty = fx.model("Empty", &bob);

    let view = fx.service.get_by_id(&empty.id).unwrap();
    assert!(view.fields.is_empty());
    assert_eq!(fx.service.get_class_definition(&view), "public class Empty\r\n{\r\n}");
}

#[test]
fn listing_is_shallow_and_filterable() {
    let fx = Fixture::new();
    let alice = fx.user("Alice");
    let bob = fx.user("Bob");
    let invoice = fx.model("Invoice", &alice);
    fx.model("Order", &bob);
    fx.field(&invoice, "Amount", "decimal");

    let all = fx.service.get_all(&Conditions::new()).unwrap();
    let names: Vec<_> = all.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Invoice", "Order"]);

    // Summaries carry no fields or user, even when they exist in the store.
    let json = serde_json::to_value(&all[0]).unwrap();
    assert!(json.get("fields").is_none());
    assert!(json.get("user").is_none());

    let alices = fx.service.get_all(&Conditions::single("user_id", alice.id)).unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].id, invoice.id);
}

#[test]
fn missing_model_is_not_found() {
    let fx = Fixture::new();
    let id = Uuid::new_v4();
    match fx.service.get_by_id(&id).unwrap_err() {
        DatabaseError::NotFound { entity, id: missing } => {
            assert_eq!(entity, EntityKind::Model);
            assert_eq!(missing, id.to_string());
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn missing_owner_is_not_found() {
    let fx = Fixture::new();
    let ghost = UserRecord::new("Ghost", None).unwrap();
    let orphan = fx.model("Orphan", &ghost);

    match fx.service.get_by_id(&orphan.id).unwrap_err() {
        DatabaseError::NotFound { entity, id } => {
            assert_eq!(entity, EntityKind::User);
            assert_eq!(id, ghost.id.to_string());
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn unknown_filter_key_is_returned_from_the_store() {
    let fx = Fixture::new();
    let err = fx.service.get_all(&Conditions::single("colour", "red")).unwrap_err();
    assert!(matches!(err, DatabaseError::UnknownColumn { table: "models", .. }));
}

#[test]
fn update_rewrites_model_and_leaves_fields() {
    let fx = Fixture::new();
    let alice = fx.user("Alice");
    let invoice = fx.model("Invoice", &alice);
    fx.field(&invoice, "Amount", "decimal");

    let mut view = fx.service.get_by_id(&invoice.id).unwrap();
    view.name = "Bill".to_string();
    view.description = Some("renamed".to_string());
    view.fields.clear();
    fx.service.update(&view).unwrap();

    let reread = fx.service.get_by_id(&invoice.id).unwrap();
    assert_eq!(reread.name, "Bill");
    assert_eq!(reread.description.as_deref(), Some("renamed"));
    assert_eq!(reread.fields.len(), 1, "fields are stored separately");
}

#[test]
fn delete_removes_model_only() {
    let fx = Fixture::new();
    let alice = fx.user("Alice");
    let invoice = fx.model("Invoice", &alice);
    fx.field(&invoice, "Amount", "decimal");

    fx.service.delete(&invoice.id).unwrap();

    assert!(matches!(
        fx.service.get_by_id(&invoice.id),
        Err(DatabaseError::NotFound { .. })
    ));
    let leftover = objdict_core::QueryRepository::get_all(
        &fx.db.repository::<FieldRecord>(),
        &Conditions::single("model_id", invoice.id),
    )
    .unwrap();
    assert_eq!(leftover.len(), 1);
}

#[test]
fn writes_for_missing_ids_are_no_ops() {
    let fx = Fixture::new();
    let alice = fx.user("Alice");
    let never_stored = ModelView::from(ModelRecord::new("Ghost", alice.id, None).unwrap());

    fx.service.update(&never_stored).unwrap();
    fx.service.delete(&never_stored.id).unwrap();
    assert!(fx.service.get_all(&Conditions::new()).unwrap().is_empty());
}
