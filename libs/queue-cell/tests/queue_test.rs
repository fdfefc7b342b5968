use assert_matches::assert_matches;
use chrono::NaiveTime;

use queue_cell::{AddPatientRequest, PatientQueue, Priority, QueueStatus};
use shared_models::ValidationError;
use shared_utils::SequentialIdGenerator;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn request(name: &str, phone: &str, priority: Priority) -> AddPatientRequest {
    AddPatientRequest {
        name: name.to_string(),
        phone: phone.to_string(),
        priority,
    }
}

#[test]
fn add_patient_assigns_one_past_the_highest_queue_number() {
    let queue = PatientQueue::seed();
    let mut ids = SequentialIdGenerator::starting_at(4);

    let before_max = queue
        .entries()
        .iter()
        .map(|e| e.queue_number)
        .max()
        .unwrap();
    let updated = queue.add_patient(
        &request("Dana", "555-0001", Priority::Urgent),
        &mut ids,
        at(11, 5),
    );

    let added = updated.entries().last().unwrap();
    assert_eq!(added.queue_number, before_max + 1);
    assert_eq!(added.queue_number, 4);
    assert_eq!(added.status, QueueStatus::Waiting);
    assert_eq!(added.priority, Priority::Urgent);
    assert_eq!(added.time_added, "11:05 AM");
    // the original snapshot is untouched
    assert_eq!(queue.len(), 3);
}

#[test]
fn add_patient_on_an_empty_queue_starts_at_one() {
    let queue = PatientQueue::new();
    let mut ids = SequentialIdGenerator::new();

    let updated = queue.add_patient(
        &request("First Walk-in", "555-0002", Priority::Normal),
        &mut ids,
        at(8, 0),
    );

    assert_eq!(updated.entries()[0].queue_number, 1);
    assert_eq!(updated.entries()[0].id, "1");
}

#[test]
fn add_patient_with_missing_fields_is_a_silent_no_op() {
    let queue = PatientQueue::seed();
    let mut ids = SequentialIdGenerator::starting_at(4);

    let no_name = queue.add_patient(&request("", "555-0003", Priority::Normal), &mut ids, at(9, 0));
    let no_phone = queue.add_patient(&request("Eve", "", Priority::Normal), &mut ids, at(9, 0));

    assert_eq!(no_name, queue);
    assert_eq!(no_phone, queue);
}

#[test]
fn try_add_patient_names_the_rejected_field() {
    let queue = PatientQueue::new();
    let mut ids = SequentialIdGenerator::new();

    let result = queue.try_add_patient(&request("", "555-0004", Priority::Normal), &mut ids, at(9, 0));
    assert_matches!(result, Err(ValidationError::MissingField(field)) if field == "name");
}

#[test]
fn set_status_replaces_only_the_matching_entry() {
    let queue = PatientQueue::seed();

    let updated = queue.set_status("2", QueueStatus::WithDoctor);

    assert_eq!(updated.entries()[1].status, QueueStatus::WithDoctor);
    assert_eq!(updated.entries()[0].status, QueueStatus::WithDoctor);
    assert_eq!(updated.entries()[2].status, QueueStatus::Waiting);
    // only the status field changed
    assert_eq!(updated.entries()[1].name, "Sarah Johnson");
    assert_eq!(updated.entries()[1].queue_number, 2);
}

#[test]
fn set_status_with_unknown_id_returns_an_equal_collection() {
    let queue = PatientQueue::seed();
    assert_eq!(queue.set_status("99", QueueStatus::Completed), queue);
}

#[test]
fn repeating_a_transition_is_idempotent() {
    let queue = PatientQueue::seed();

    let once = queue.set_status("1", QueueStatus::Completed);
    let twice = once.set_status("1", QueueStatus::Completed);

    assert_eq!(once, twice);
}

#[test]
fn requeue_keeps_the_original_queue_number() {
    let queue = PatientQueue::seed()
        .set_status("1", QueueStatus::Completed)
        .set_status("1", QueueStatus::Waiting);

    let requeued = &queue.entries()[0];
    assert_eq!(requeued.status, QueueStatus::Waiting);
    assert_eq!(requeued.queue_number, 1);
}

#[test]
fn counts_are_recomputed_per_status() {
    let queue = PatientQueue::seed();
    let counts = queue.counts();
    assert_eq!(counts.waiting, 2);
    assert_eq!(counts.with_doctor, 1);
    assert_eq!(counts.completed, 0);
    assert_eq!(counts.total(), 3);

    let counts = queue.set_status("1", QueueStatus::Completed).counts();
    assert_eq!(counts.with_doctor, 0);
    assert_eq!(counts.completed, 1);
}

#[test]
fn surfaced_transitions_cycle_through_the_three_states() {
    assert_eq!(
        QueueStatus::Waiting.surfaced_transition(),
        QueueStatus::WithDoctor
    );
    assert_eq!(
        QueueStatus::WithDoctor.surfaced_transition(),
        QueueStatus::Completed
    );
    assert_eq!(
        QueueStatus::Completed.surfaced_transition(),
        QueueStatus::Waiting
    );
}

#[test]
fn statuses_serialize_with_snake_case_wire_names() {
    let json = serde_json::to_string(&QueueStatus::WithDoctor).unwrap();
    assert_eq!(json, "\"with_doctor\"");
    let parsed: QueueStatus = serde_json::from_str("\"waiting\"").unwrap();
    assert_eq!(parsed, QueueStatus::Waiting);
}
