use pagenav_engine::NavigationError;
use pagenav_host::{ActivationOutcome, ConstructOptions, Host, HostAdapter, UpdateOptions, UpdateOutcome};
use serde_json::Value;

#[derive(Debug, Default)]
struct RecordingHost {
    launched: Vec<String>,
    reported: Vec<NavigationError>,
}

impl Host for RecordingHost {
    fn launch_url(&mut self, url: &str) {
        self.launched.push(url.to_string());
    }

    fn report(&mut self, error: &NavigationError) {
        self.reported.push(error.clone());
    }
}

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).expect("parse fixture")
}

fn nested_view() -> Value {
    fixture(include_str!("data/nested_pages.json"))
}

fn construct(view: Value) -> HostAdapter<RecordingHost> {
    HostAdapter::on_construct(RecordingHost::default(), ConstructOptions::new("nav").with_data_view(view))
}

fn entry_summary(adapter: &HostAdapter<RecordingHost>) -> Vec<(String, usize, bool, bool)> {
    adapter
        .render()
        .expect("widget attached")
        .entries
        .into_iter()
        .map(|entry| (entry.page_id, entry.depth, entry.expandable, entry.selected))
        .collect()
}

#[test]
fn renders_nested_pages_in_pre_order() {
    let adapter = construct(nested_view());
    let summary = entry_summary(&adapter);
    let expected = vec![
        ("home".to_string(), 0, true, true),
        ("reports".to_string(), 1, true, false),
        ("sales".to_string(), 2, false, false),
        ("costs".to_string(), 2, false, false),
        ("about".to_string(), 0, false, false),
    ];
    assert_eq!(summary, expected);
    assert_eq!(adapter.render().expect("widget attached").title, "Site");
    assert_eq!(adapter.settings().indent_width, 3);
    assert!(adapter.host().reported.is_empty(), "{:?}", adapter.host().reported);
}

#[test]
fn activation_then_update_keeps_selection() {
    let mut adapter = construct(nested_view());
    let outcome = adapter.on_activate("sales");
    assert!(matches!(outcome, ActivationOutcome::Launched(ref intent) if intent.url == "https://example.com/reports/sales"));

    let outcome = adapter.on_update(&UpdateOptions::from_data_view(nested_view()));
    assert_eq!(outcome, UpdateOutcome::Rebuilt);
    let visual = adapter.render().expect("widget attached");
    let selected = visual.selected_index().map(|index| visual.entries[index].page_id.as_str());
    assert_eq!(selected, Some("sales"));
    assert_eq!(adapter.host().launched, vec!["https://example.com/reports/sales".to_string()]);
}

#[test]
fn removing_selected_page_falls_back_to_declared_default() {
    let mut adapter = construct(nested_view());
    adapter.on_activate("about");

    let mut view = nested_view();
    let pages = view["pages"].as_array_mut().expect("pages array");
    pages.retain(|page| page["id"] != "about");

    assert_eq!(adapter.on_update(&UpdateOptions::from_data_view(view)), UpdateOutcome::Rebuilt);
    let selected = adapter
        .view_model()
        .and_then(|view_model| view_model.selection().selected_id().map(str::to_string));
    assert_eq!(selected.as_deref(), Some("home"));
}

#[test]
fn rejected_update_retains_previous_tree_and_reports() {
    let mut adapter = construct(nested_view());
    let before = adapter.render();

    let outcome = adapter.on_update(&UpdateOptions::from_data_view(fixture(include_str!("data/dangling_child.json"))));
    let expected = NavigationError::DanglingChild {
        parent_id: "home".into(),
        child_id: "ghost".into(),
    };
    assert_eq!(outcome, UpdateOutcome::Retained(expected.clone()));
    assert_eq!(adapter.host().reported, vec![expected]);
    assert_eq!(adapter.update_count(), 1);

    assert_eq!(adapter.render(), before);
    assert_eq!(adapter.render().expect("widget attached").title, "Site");
}

#[test]
fn host_aliases_are_accepted() {
    let adapter = construct(fixture(include_str!("data/host_aliases.json")));
    let summary = entry_summary(&adapter);
    assert_eq!(
        summary,
        vec![("dashboard".to_string(), 0, true, false), ("usage".to_string(), 1, false, true)]
    );
    let visual = adapter.render().expect("widget attached");
    assert_eq!(visual.entry("usage").map(|entry| entry.url.as_str()), Some("https://example.com/usage"));
}

#[test]
fn boxed_hosts_drive_the_adapter() {
    let host: Box<dyn Host> = Box::new(RecordingHost::default());
    let mut adapter = HostAdapter::on_construct(host, ConstructOptions::new("boxed"));
    assert!(matches!(adapter.on_activate("hpage"), ActivationOutcome::Launched(_)));
    adapter.on_destroy();
    assert!(adapter.render().is_none());
    assert_eq!(adapter.element(), "boxed");
}
