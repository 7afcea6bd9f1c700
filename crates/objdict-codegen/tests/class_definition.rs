//! Class definition generation over field metadata.
//!
//! Covers determinism, order preservation, property count, verbatim
//! name/type pass-through and the empty-class case.

use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

use objdict_codegen::{ClassGenerator, LineEnding, PrintOptions};
use objdict_core::views::FieldView;

fn fields(pairs: &[(&str, &str)]) -> Vec<FieldView> {
    let model_id = Uuid::new_v4();
    pairs
        .iter()
        .map(|(name, type_name)| FieldView {
            id: Uuid::new_v4(),
            model_id,
            name: (*name).to_string(),
            type_name: (*type_name).to_string(),
        })
        .collect()
}

fn property_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.ends_with("{ get; set; }"))
        .collect()
}

#[test]
fn invoice_scenario() {
    let text = ClassGenerator::new().generate(
        "Invoice",
        &fields(&[("Amount", "decimal"), ("Currency", "string")]),
    );
    assert_eq!(
        text,
        "public class Invoice\r\n\
         {\r\n    public decimal Amount { get; set; }\r\n\r\n    public string Currency { get; set; }\r\n}"
    );
}

#[test]
fn empty_field_list_gives_empty_class() {
    let text = ClassGenerator::new().generate("Invoice", &[]);
    assert_eq!(text, "public class Invoice\r\n{\r\n}");
    assert!(property_lines(&text).is_empty());
}

#[test]
fn output_is_deterministic() {
    let input = fields(&[("Id", "Guid"), ("Lines", "List<InvoiceLine>"), ("Paid", "bool?")]);
    let generator = ClassGenerator::new();
    let first = generator.generate("Invoice", &input);
    for _ in 0..10 {
        assert_eq!(generator.generate("Invoice", &input), first);
    }
    // Identifiers on the views do not leak into the text.
    let fresh = fields(&[("Id", "Guid"), ("Lines", "List<InvoiceLine>"), ("Paid", "bool?")]);
    assert_eq!(generator.generate("Invoice", &fresh), first);
}

#[test]
fn reordering_input_reorders_output() {
    let generator = ClassGenerator::new();
    let forward = generator.generate("Pair", &fields(&[("Left", "int"), ("Right", "string")]));
    let reversed = generator.generate("Pair", &fields(&[("Right", "string"), ("Left", "int")]));
    assert_eq!(
        property_lines(&forward),
        ["public int Left { get; set; }", "public string Right { get; set; }"]
    );
    assert_eq!(
        property_lines(&reversed),
        ["public string Right { get; set; }", "public int Left { get; set; }"]
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(17)]
fn one_property_per_field(#[case] count: usize) {
    let names: Vec<String> = (0..count).map(|i| format!("Field{i}")).collect();
    let pairs: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "int")).collect();
    let text = ClassGenerator::new().generate("Wide", &fields(&pairs));
    assert_eq!(property_lines(&text).len(), count);
}

#[rstest]
#[case("Amount", "decimal")]
#[case("CustomerId", "System.Guid")]
#[case("Tags", "IReadOnlyList<string>")]
#[case("Matrix", "double[,]")]
#[case("Due", "DateTime?")]
#[case("@event", "string")]
fn names_and_types_pass_through(#[case] name: &str, #[case] type_name: &str) {
    let text = ClassGenerator::new().generate("Holder", &fields(&[(name, type_name)]));
    assert!(
        text.contains(&format!("public {type_name} {name} {{ get; set; }}")),
        "missing property in:\n{text}"
    );
}

#[test]
fn type_whitespace_is_normalized() {
    let text =
        ClassGenerator::new().generate("Lookup", &fields(&[("Index", "Dictionary< string ,int >")]));
    assert!(text.contains("public Dictionary<string, int> Index { get; set; }"));
}

#[test]
fn duplicate_names_are_not_rejected() {
    let text = ClassGenerator::new().generate(
        "Invoice",
        &fields(&[("Amount", "decimal"), ("Amount", "NotAType<<")]),
    );
    assert_eq!(property_lines(&text).len(), 2);
    assert!(text.starts_with("public class Invoice\r\n{\r\n"));
    assert!(text.ends_with("\r\n}"));
}

#[test]
fn default_line_ending_is_crlf() {
    let text = ClassGenerator::new().generate("Invoice", &fields(&[("Amount", "decimal")]));
    assert_eq!(text, "public class Invoice\r\n{\r\n    public decimal Amount { get; set; }\r\n}");
    assert!(!text.replace("\r\n", "").contains('\n'));
}

#[test]
fn lf_generator() {
    let generator = ClassGenerator::csharp(PrintOptions {
        indent_width: 4,
        line_ending: LineEnding::Lf,
    });
    let text = generator.generate("Invoice", &fields(&[("Amount", "decimal")]));
    assert_eq!(text, "public class Invoice\n{\n    public decimal Amount { get; set; }\n}");
}

#[test]
fn non_identifier_names_are_emitted_verbatim() {
    let text =
        ClassGenerator::new().generate("X", &fields(&[("A { get; } } class Y {", "int")]));
    assert!(text.contains("    public int A { get; } } class Y { { get; set; }"));
    assert!(ClassGenerator::new()
        .try_generate("X", &fields(&[("A { get; } } class Y {", "int")]))
        .is_err());
}

#[test]
fn strict_mode_accepts_scenario_and_rejects_keywords() {
    let generator = ClassGenerator::new();
    let ok = generator.try_generate("Invoice", &fields(&[("Amount", "decimal"), ("Currency", "string")]));
    assert!(ok.is_ok());
    let err = generator.try_generate("Invoice", &fields(&[("class", "string")]));
    assert!(err.is_err());
}
