//! End-to-end walk through the application flow, driving the session
//! core the way a front end would.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use loan_core::calculations::{estimated_salary_income, payment_entry};
use loan_core::models::{
    AddressInfo, EmploymentInfo, EmploymentStatus, HousingStatus, PersonalInfo, VehicleId,
};
use loan_core::session::{Step, StepFields, StepWizard, WizardPhase};

fn step(n: u8) -> Step {
    Step::new(n).unwrap()
}

#[test]
fn full_application_walkthrough() {
    let mut wizard = StepWizard::new();
    assert_eq!(wizard.progress_percent(), 0.0);

    // Landing -> step 1: pick two vehicles, favorite the second.
    wizard.start().unwrap();
    let state = wizard.state_mut();
    state.vehicles.toggle(VehicleId(2)).unwrap();
    state.vehicles.toggle(VehicleId(5)).unwrap();
    state.vehicles.set_favorite(VehicleId(5)).unwrap();
    assert!(wizard.can_advance());

    // Step 2: payment terms. The free-text entry is clamped.
    wizard.navigate_to(step(2)).unwrap();
    wizard.state_mut().monthly_payment = payment_entry("1500");
    assert_eq!(wizard.state().monthly_payment, 1000);
    wizard.state_mut().monthly_payment = payment_entry("600");
    wizard.state_mut().down_payment = dec!(2500);

    // Step 3: protection options feed the total payment display.
    wizard.navigate_to(step(3)).unwrap();
    wizard.state_mut().protection.extended_warranty = true;
    wizard.state_mut().protection.gap_coverage = true;
    assert_eq!(wizard.state().total_monthly_payment(), 674);

    // Step 4: personal info, committed on exit.
    wizard.navigate_to(step(4)).unwrap();
    wizard.record_step_fields(StepFields::Personal(PersonalInfo {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        phone: "555-0199".into(),
    }));

    // Step 5: address info.
    wizard.navigate_to(step(5)).unwrap();
    wizard.record_step_fields(StepFields::Address(AddressInfo {
        street_address: "1 Navy Way".into(),
        city: "Arlington".into(),
        state: "Virginia".into(),
        zip: "22202".into(),
        housing_status: Some(HousingStatus::Rent),
        years_at_address: 1,
        months_at_address: 3,
    }));

    // Step 6: employment, with an income estimate shown alongside.
    wizard.navigate_to(step(6)).unwrap();
    assert_eq!(estimated_salary_income("60000", "yearly"), dec!(5000.00));
    wizard.record_step_fields(StepFields::Employment(EmploymentInfo {
        status: EmploymentStatus::Employed,
        employer: "US Navy".into(),
        job_title: "Rear Admiral".into(),
        monthly_income: dec!(5000.00),
        years_at_job: 10,
        months_at_job: 0,
        hire_date: None,
    }));

    // Step 7: additional income, added and removed again.
    wizard.navigate_to(step(7)).unwrap();
    let ledger = &mut wizard.state_mut().additional_income;
    let bonus = ledger.add("bonus", "500").unwrap();
    assert!(ledger.has_entries());
    assert!(ledger.remove(bonus));
    assert!(ledger.is_empty());

    // Everything committed so far survives a trip back to step 1.
    wizard.navigate_to(step(1)).unwrap();
    wizard.navigate_to(step(7)).unwrap();
    assert_eq!(
        wizard.state().personal.as_ref().unwrap().email,
        "grace@example.com"
    );
    assert_eq!(wizard.state().address.as_ref().unwrap().zip, "22202");
    assert_eq!(
        wizard.state().employment.as_ref().unwrap().employer,
        "US Navy"
    );

    // Step 8: terms gate the submit control.
    wizard.navigate_to(step(8)).unwrap();
    assert!(!wizard.can_submit());
    wizard.state_mut().terms_agreed = true;
    assert!(wizard.can_submit());

    wizard.submit().unwrap();
    assert_eq!(wizard.phase(), WizardPhase::Submitted);
    assert_eq!(wizard.progress_percent(), 100.0);

    // The aggregate is still readable after submission.
    let state = wizard.state();
    assert_eq!(state.vehicles.favorite(), Some(VehicleId(5)));
    assert_eq!(state.monthly_payment, 600);
    assert_eq!(state.total_monthly_payment(), 674);
}

#[test]
fn revisiting_an_owning_step_overwrites_on_exit_only() {
    let mut wizard = StepWizard::new();
    wizard.start().unwrap();
    wizard.navigate_to(step(4)).unwrap();
    wizard.record_step_fields(StepFields::Personal(PersonalInfo {
        first_name: "First".into(),
        ..PersonalInfo::default()
    }));
    wizard.navigate_to(step(5)).unwrap();

    // Back on step 4 the committed value is still the old one until
    // the step is left again.
    wizard.navigate_to(step(4)).unwrap();
    wizard.record_step_fields(StepFields::Personal(PersonalInfo {
        first_name: "Second".into(),
        ..PersonalInfo::default()
    }));
    assert_eq!(
        wizard.state().personal.as_ref().unwrap().first_name,
        "First"
    );

    wizard.navigate_to(step(5)).unwrap();
    assert_eq!(
        wizard.state().personal.as_ref().unwrap().first_name,
        "Second"
    );
}
