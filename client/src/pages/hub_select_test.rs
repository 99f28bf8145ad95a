use super::*;

fn hub(id: i64, state_id: Option<i64>) -> Hub {
    Hub { hub_id: id, hub_name: format!("Hub {id}"), state_id, ..Hub::default() }
}

#[test]
fn airport_searches_use_their_own_hubs() {
    let location = Location::Airport { code: "PNQ".into(), hubs: vec![hub(1, None)] };
    assert_eq!(hub_source(&location), HubSource::Listed(vec![hub(1, None)]));
}

#[test]
fn city_searches_fetch_by_city() {
    let location = Location::City { state_id: 2, state_name: "Goa".into(), city_id: Some(7), city_name: None };
    assert_eq!(hub_source(&location), HubSource::Fetch { city_id: Some(7), state_id: 2 });
}

#[test]
fn state_wide_results_drop_other_states() {
    let kept: Vec<i64> = hubs_in_state(vec![hub(1, Some(2)), hub(2, Some(3)), hub(3, None)], 2)
        .into_iter()
        .map(|h| h.hub_id)
        .collect();
    assert_eq!(kept, [1, 3]);
}
