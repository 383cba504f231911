mod common;

use common::StaticGeoService;
use location_picker::collation::locale_cmp;
use location_picker::picker::{
    Effect, LocationPicker, PickerIntent, MUNICIPALITY_PROMPT, SUBDIVISION_PROMPT,
};
use std::cmp::Ordering;

/// Executes `effect` against `service` and feeds the result back.
async fn run(picker: &mut LocationPicker, effect: Option<Effect>, service: &StaticGeoService) {
    let mut next = effect;
    while let Some(effect) = next.take() {
        let intent = effect.execute(service).await.expect("effect failed");
        next = picker.dispatch(intent);
    }
}

fn subdivision_codes(picker: &LocationPicker) -> Vec<&str> {
    picker
        .state()
        .subdivisions
        .iter()
        .map(|s| s.code.as_str())
        .collect()
}

fn municipality_names(picker: &LocationPicker) -> Vec<&str> {
    picker
        .state()
        .municipalities
        .iter()
        .map(|m| m.name.as_str())
        .collect()
}

#[tokio::test]
async fn full_selection_scenario() {
    let service = StaticGeoService::scenario();
    let mut picker = LocationPicker::new();

    // Mount
    let effect = picker.initialize();
    assert_eq!(effect, Some(Effect::LoadSubdivisions));
    run(&mut picker, effect, &service).await;
    assert_eq!(subdivision_codes(&picker), vec!["AC", "SP"]);

    // Select SP
    let effect = picker.on_subdivision_selected("SP");
    run(&mut picker, effect, &service).await;
    assert_eq!(
        municipality_names(&picker),
        vec!["Campinas", "São José dos Campos"]
    );

    // Select Campinas
    assert_eq!(picker.on_municipality_selected("Campinas"), None);
    assert_eq!(picker.status().selected.as_deref(), Some("SP / Campinas"));

    // Switch to AC: municipality resets, prompt is back
    let effect = picker.on_subdivision_selected("AC");
    assert_eq!(picker.state().selection.municipality_name, "");
    let status = picker.status();
    assert!(status.municipality_prompt);
    assert!(!status.subdivision_prompt);
    assert_eq!(status.selected, None);
    assert_eq!(status.lines(), vec![MUNICIPALITY_PROMPT]);

    run(&mut picker, effect, &service).await;
    assert_eq!(municipality_names(&picker), vec!["Cruzeiro do Sul", "Rio Branco"]);

    assert_eq!(
        service.calls(),
        vec!["subdivisions", "municipalities:SP", "municipalities:AC"]
    );
}

#[tokio::test]
async fn stored_lists_are_non_decreasing() {
    let mut service = StaticGeoService::scenario();
    service.subdivisions.push(location_picker::geo::Subdivision::new(3, "Amapá", "AP"));
    service.subdivisions.push(location_picker::geo::Subdivision::new(4, "Bahia", "BA"));
    service.municipalities.insert(
        "BA".to_string(),
        ["Xique-Xique", "Água Fria", "abaíra", "Barra", "Érico Cardoso", "Andaraí"]
            .iter()
            .enumerate()
            .map(|(i, name)| location_picker::geo::Municipality::new(i as u32, *name))
            .collect(),
    );

    let mut picker = LocationPicker::new();
    let effect = picker.initialize();
    run(&mut picker, effect, &service).await;
    let codes = subdivision_codes(&picker);
    assert!(codes
        .windows(2)
        .all(|w| locale_cmp(w[0], w[1]) != Ordering::Greater));

    let effect = picker.on_subdivision_selected("BA");
    run(&mut picker, effect, &service).await;
    let names = municipality_names(&picker);
    assert!(names
        .windows(2)
        .all(|w| locale_cmp(w[0], w[1]) != Ordering::Greater));
    assert_eq!(names.first(), Some(&"abaíra"));
    assert_eq!(names.last(), Some(&"Xique-Xique"));
}

#[test]
fn subdivision_change_always_clears_municipality() {
    let mut picker = LocationPicker::new();
    for code in ["SP", "AC", "RJ", ""] {
        picker.on_municipality_selected("Somewhere");
        picker.on_subdivision_selected(code);
        assert_eq!(picker.state().selection.municipality_name, "");
        assert_eq!(picker.state().selection.subdivision_code, code);
    }
}

#[test]
fn fetch_triggers_only_for_non_empty_codes() {
    let mut picker = LocationPicker::new();

    let effect = picker.on_subdivision_selected("SP");
    assert!(matches!(
        effect,
        Some(Effect::LoadMunicipalities { ref code, .. }) if code == "SP"
    ));

    assert_eq!(picker.on_subdivision_selected(""), None);
    assert_eq!(picker.reset(), None);
}

#[test]
fn reset_is_idempotent() {
    let mut picker = LocationPicker::new();
    picker.on_subdivision_selected("SP");
    picker.on_municipality_selected("Campinas");

    picker.reset();
    let once = picker.state().clone();
    picker.reset();
    assert_eq!(picker.state(), &once);

    let status = picker.status();
    assert_eq!(status.lines(), vec![SUBDIVISION_PROMPT, MUNICIPALITY_PROMPT]);
}

#[tokio::test]
async fn late_response_for_previous_subdivision_is_discarded() {
    let service = StaticGeoService::scenario();
    let mut picker = LocationPicker::new();

    let sp_fetch = picker.on_subdivision_selected("SP").unwrap();
    let ac_fetch = picker.on_subdivision_selected("AC").unwrap();

    // AC resolves first, SP arrives late.
    let ac_result = ac_fetch.execute(&service).await.unwrap();
    let sp_result = sp_fetch.execute(&service).await.unwrap();

    picker.dispatch(ac_result);
    assert_eq!(municipality_names(&picker), vec!["Cruzeiro do Sul", "Rio Branco"]);

    let before = picker.state().clone();
    assert!(matches!(sp_result, PickerIntent::MunicipalitiesLoaded { .. }));
    assert_eq!(picker.dispatch(sp_result), None);
    assert_eq!(picker.state(), &before);
}

#[tokio::test]
async fn deselecting_keeps_previous_municipality_list() {
    let service = StaticGeoService::scenario();
    let mut picker = LocationPicker::new();

    let effect = picker.on_subdivision_selected("SP");
    run(&mut picker, effect, &service).await;
    assert_eq!(picker.state().municipalities.len(), 2);

    assert_eq!(picker.on_subdivision_selected(""), None);
    assert_eq!(picker.state().municipalities.len(), 2);
}

#[tokio::test]
async fn failed_subdivision_fetch_leaves_list_empty() {
    let service = StaticGeoService {
        fail_subdivisions: true,
        ..StaticGeoService::scenario()
    };
    let mut picker = LocationPicker::new();

    let effect = picker.initialize().unwrap();
    let err = effect.execute(&service).await.unwrap_err();
    assert_eq!(err.kind(), "status");
    assert!(picker.state().subdivisions.is_empty());
    assert_eq!(picker.initialize(), None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn runner_delivers_out_of_order_results_and_picker_keeps_latest() {
    use location_picker::ui::effects::spawn_effect_runner;
    use location_picker::ui::events::AppEvent;
    use std::sync::Arc;
    use std::time::Duration;

    let service = Arc::new(
        StaticGeoService::scenario().with_delay("SP", Duration::from_millis(300)),
    );
    let (events_tx, events_rx) = std::sync::mpsc::channel();
    let (effects, join) =
        spawn_effect_runner(&tokio::runtime::Handle::current(), service.clone(), events_tx);

    let mut picker = LocationPicker::new();
    let sp_fetch = picker.on_subdivision_selected("SP").unwrap();
    let ac_fetch = picker.on_subdivision_selected("AC").unwrap();
    effects.send(sp_fetch).await.unwrap();
    effects.send(ac_fetch).await.unwrap();

    let received = tokio::task::spawn_blocking(move || {
        (0..2)
            .map(|_| {
                match events_rx
                    .recv_timeout(Duration::from_secs(5))
                    .expect("effect result not delivered")
                {
                    AppEvent::Picker(intent) => intent,
                    _ => panic!("unexpected event"),
                }
            })
            .collect::<Vec<_>>()
    })
    .await
    .unwrap();

    // AC finished first despite being requested second.
    assert!(matches!(
        received[0],
        PickerIntent::MunicipalitiesLoaded { generation: 2, .. }
    ));

    for intent in received {
        picker.dispatch(intent);
    }
    assert_eq!(picker.state().selection.subdivision_code, "AC");
    assert_eq!(municipality_names(&picker), vec!["Cruzeiro do Sul", "Rio Branco"]);

    drop(effects);
    join.await.unwrap();
}
