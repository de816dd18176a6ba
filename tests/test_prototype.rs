
use mix_util::{
    blog, init_tracing, BlogEntry, InheritedInheritedMix, InheritedMix, ParameterlessMix,
};
use protomix::mix::{
    natives, DynamicRecord, ExpandoObject, Mix, MixError, MixValue, Prototype,
};

fn s(value: &str) -> MixValue {
    MixValue::from(value)
}

// ── responds_to ──────────────────────────────────────────────────────

#[test]
fn test_responds_to_exact_casing() {
    let mix = Prototype::new(blog());
    assert!(mix.responds_to("Title"));
}

#[test]
fn test_responds_to_case_insensitive() {
    let mix = Prototype::new(blog());
    assert!(mix.responds_to("title"));
    assert!(mix.responds_to("BODY"));
}

#[test]
fn test_does_not_respond_to_unknown_property() {
    let mix = Prototype::new(blog());
    assert!(!mix.responds_to("foobar"));
}

// ── get_value_for ────────────────────────────────────────────────────

#[test]
fn test_get_value_for_exact_casing() {
    let mix = Prototype::new(blog());
    assert_eq!(mix.get_value_for("Title").unwrap(), s("Some Name"));
}

#[test]
fn test_get_value_for_case_insensitive() {
    let mix = Prototype::new(blog());
    assert_eq!(mix.get_value_for("title").unwrap(), s("Some Name"));
}

#[test]
fn test_get_value_for_unknown_property_fails() {
    let mix = Prototype::new(blog());
    match mix.get_value_for("FooBar") {
        Err(err @ MixError::UnresolvedMember { .. }) => {
            assert_eq!(
                err.to_string(),
                "This mix does not respond to the property FooBar."
            );
            assert_eq!(err.member_name(), Some("FooBar"));
        }
        other => panic!("expected UnresolvedMember, got {:?}", other),
    }
}

// ── Reading through the mix ──────────────────────────────────────────

#[test]
fn test_reads_value_of_mixed_record() {
    init_tracing();
    let mix = Prototype::new(blog());
    assert_eq!(mix.get("Title").unwrap(), s("Some Name"));
}

#[test]
fn test_reads_value_when_first_letter_case_differs() {
    let mix = Prototype::new(blog());
    assert_eq!(mix.get("title").unwrap(), s("Some Name"));
}

#[test]
fn test_reads_lowercase_key_through_capitalized_name() {
    let mix = Prototype::new(blog());
    assert_eq!(mix.get("Body").unwrap(), s("Some Body"));
}

#[test]
fn test_reads_ignoring_case_entirely() {
    let mix = Prototype::new(blog());
    assert_eq!(mix.get("bodysummary").unwrap(), s("Body Summary"));
}

#[test]
fn test_read_of_unknown_property_fails() {
    let mix = Prototype::new(blog());
    assert!(matches!(
        mix.get("Nope"),
        Err(MixError::UnresolvedMember { ref name, .. }) if name == "Nope"
    ));
}

// ── Writing through the mix ──────────────────────────────────────────

#[test]
fn test_sets_property_on_underlying_record() {
    let record = blog();
    let mix = Prototype::new(record.clone());
    mix.set("Title", s("Some other name")).unwrap();
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Some other name")));
}

#[test]
fn test_sets_property_when_first_letter_case_differs() {
    let record = blog();
    let mix = Prototype::new(record.clone());
    mix.set("title", s("Some other name")).unwrap();
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Some other name")));
    assert_eq!(record.borrow().get_exact("title"), None);
}

#[test]
fn test_sets_lowercase_key_through_capitalized_name() {
    let record = blog();
    let mix = Prototype::new(record.clone());
    mix.set("Body", s("Some other name")).unwrap();
    assert_eq!(record.borrow().get_exact("body"), Some(s("Some other name")));
}

#[test]
fn test_sets_ignoring_case_entirely() {
    let record = blog();
    let mix = Prototype::new(record.clone());
    mix.set("bodysummary", s("Blog Summary New")).unwrap();
    assert_eq!(
        record.borrow().get_exact("BodySummary"),
        Some(s("Blog Summary New"))
    );
}

#[test]
fn test_write_then_read_round_trip_across_casings() {
    let mix = Prototype::new(blog());
    mix.set("title", s("X")).unwrap();
    assert_eq!(mix.get("Title").unwrap(), s("X"));

    mix.set("BRAND_NEW", MixValue::from(42_i64)).unwrap();
    assert_eq!(mix.get("brand_new").unwrap(), MixValue::from(42_i64));
    let keys: Vec<String> = mix.expando().borrow().keys().map(String::from).collect();
    assert_eq!(keys, vec!["Title", "body", "BodySummary", "BRAND_NEW"]);
}

#[test]
fn test_mixes_share_one_record() {
    let record = blog();
    let first = Prototype::new(record.clone());
    let second = InheritedMix::new(record.clone());
    first.set("Title", s("Shared Title")).unwrap();
    assert_eq!(second.get("title").unwrap(), s("Shared Title"));
    assert_eq!(second.get("FirstName").unwrap(), s("Shared"));
}

// ── Inherited mix with declared members ──────────────────────────────

#[test]
fn test_inherited_mix_reads_underlying_property() {
    let mix = InheritedMix::new(blog());
    assert_eq!(mix.get("Title").unwrap(), s("Some Name"));
}

#[test]
fn test_inherited_mix_sets_underlying_property() {
    let record = blog();
    let mix = InheritedMix::new(record.clone());
    mix.set("Title", s("Some other name")).unwrap();
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Some other name")));
}

#[test]
fn test_inherited_mix_calls_declared_method() {
    let mix = InheritedMix::new(blog());
    assert_eq!(mix.call("FirstLetter", vec![]).unwrap(), s("S"));
}

#[test]
fn test_inherited_mix_reads_declared_property() {
    let mix = InheritedMix::new(blog());
    assert_eq!(mix.get("FirstName").unwrap(), s("Some"));
    assert!(mix.has_member("FirstName"));
    assert!(!mix.responds_to("FirstName"));
}

// ── Declared setters ─────────────────────────────────────────────────

#[test]
fn test_declared_setter_rewrites_record() {
    let record = blog();
    let mix = InheritedMix::new(record.clone());
    mix.set("FirstName", s("Other")).unwrap();
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Other Name")));
    assert_eq!(record.borrow().get_exact("FirstName"), None);
    assert!(!mix.responds_to("FirstName"));
    assert_eq!(mix.get("FirstName").unwrap(), s("Other"));
}

#[test]
fn test_declared_setter_reached_through_double_inheritance() {
    let record = blog();
    let mix = InheritedInheritedMix::new(record.clone());
    mix.set("FirstName", s("Awesome")).unwrap();
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Awesome Name")));
    assert_eq!(record.borrow().len(), 3);
    assert_eq!(mix.call("FirstLetter", vec![]).unwrap(), s("A"));
}

#[test]
fn test_declared_setter_error_propagates() {
    let record = blog();
    let mix = InheritedInheritedMix::new(record.clone());
    assert_eq!(
        mix.set("FirstName", MixValue::from(7_i64)),
        Err(MixError::TypeError(
            "FirstName expects a string, got number".to_string()
        ))
    );
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Some Name")));
    assert_eq!(record.borrow().len(), 3);
}

#[test]
fn test_declared_setter_matches_exact_case_only() {
    let record = blog();
    let mix = InheritedMix::new(record.clone());
    mix.set("firstname", s("Other")).unwrap();
    assert_eq!(record.borrow().get_exact("firstname"), Some(s("Other")));
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Some Name")));
}

// ── Double inheritance ───────────────────────────────────────────────

#[test]
fn test_double_inheritance_reads_root_record() {
    let mix = InheritedInheritedMix::new(blog());
    assert_eq!(mix.get("Title").unwrap(), s("Some Name"));
}

#[test]
fn test_double_inheritance_calls_method_on_first_mix() {
    let mix = InheritedInheritedMix::new(blog());
    assert_eq!(mix.call("FirstLetter", vec![]).unwrap(), s("S"));
    assert_eq!(mix.get("FirstName").unwrap(), s("Some"));
}

#[test]
fn test_double_inheritance_calls_method_on_top_most_mix() {
    let mix = InheritedInheritedMix::new(blog());
    assert_eq!(mix.call("LastLetter", vec![]).unwrap(), s("e"));
    assert!(mix.declares("LastLetter"));
    assert!(mix.declares("FirstLetter"));
    assert!(!mix.declares("lastletter"));
}

// ── Declared members override the record ─────────────────────────────

fn working_with_oak() -> std::rc::Rc<std::cell::RefCell<ExpandoObject>> {
    ExpandoObject::with_entries(vec![
        ("Title", s("Working With Oak")),
        ("Body", s("Oak is tight, yo.")),
    ])
    .into_shared()
}

#[test]
fn test_blog_entry_base_properties_accessible() {
    let mix = BlogEntry::new(working_with_oak());
    assert_eq!(mix.get("Title").unwrap(), s("Working With Oak"));
}

#[test]
fn test_blog_entry_base_properties_settable() {
    let record = working_with_oak();
    let mix = BlogEntry::new(record.clone());
    mix.set("Title", s("Another Title")).unwrap();
    assert_eq!(record.borrow().get_exact("Title"), Some(s("Another Title")));
}

#[test]
fn test_blog_entry_declared_method_available() {
    let mix = BlogEntry::new(working_with_oak());
    assert_eq!(mix.call("IsValid", vec![]).unwrap(), MixValue::from(true));

    mix.set("Title", s("")).unwrap();
    assert_eq!(mix.call("IsValid", vec![]).unwrap(), MixValue::from(false));
}

#[test]
fn test_blog_entry_declared_property_overrides_record() {
    let mix = BlogEntry::new(working_with_oak());
    assert_eq!(mix.get("Body").unwrap(), s(""));
    assert_eq!(mix.get_value_for("Body").unwrap(), s("Oak is tight, yo."));
    assert_eq!(mix.get("body").unwrap(), s("Oak is tight, yo."));
}

// ── Parameterless mix ────────────────────────────────────────────────

#[test]
fn test_parameterless_mix_properties_accessible() {
    let mix = ParameterlessMix::new();
    assert_eq!(mix.get("FirstName").unwrap(), s(""));
    assert_eq!(mix.get("lastname").unwrap(), s(""));
}

#[test]
fn test_tacking_on_properties_after_the_fact() {
    let mix = ParameterlessMix::new();
    mix.expando().borrow_mut().assign("NewProp", s("new prop"));
    assert_eq!(mix.get("NewProp").unwrap(), s("new prop"));
}

#[test]
fn test_tacking_on_methods_after_the_fact() {
    init_tracing();
    let mix = ParameterlessMix::new();
    mix.expando()
        .borrow_mut()
        .assign("NewProp", MixValue::native(natives::upper));
    assert_eq!(mix.call("NewProp", vec![s("hello")]).unwrap(), s("HELLO"));
}

#[test]
fn test_tacked_on_method_can_be_read_then_invoked() {
    let mix = ParameterlessMix::new();
    mix.expando().borrow_mut().assign(
        "Greet",
        MixValue::closure(|args| {
            let name = args.first().and_then(|a| a.as_str()).unwrap_or("stranger");
            Ok(MixValue::from(format!("hi {}", name)))
        }),
    );
    let greet = mix.get("greet").unwrap();
    let f = greet.as_function().expect("callable");
    assert_eq!(f.call(vec![s("oak")]).unwrap(), s("hi oak"));
}

#[test]
fn test_calling_non_callable_member_fails() {
    let mix = ParameterlessMix::new();
    assert_eq!(
        mix.call("FirstName", vec![]),
        Err(MixError::not_callable("FirstName"))
    );
}
