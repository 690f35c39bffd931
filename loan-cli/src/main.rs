//! Line-oriented front end for the auto-loan application wizard.
//!
//! This binary plays the role of the binding layer: it forwards typed
//! commands into the session core and prints the core's outputs.
//! Rejections from the core are printed and never end the session.

mod catalog;
mod logging;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use loan_core::calculations::{
    duration_bucket, estimated_hourly_income, estimated_salary_income, job_tenure_from_hire_date,
    payment_entry,
};
use loan_core::calculations::fields::{decimal_or_zero, int_or_zero};
use loan_core::models::{
    AddressInfo, EmploymentInfo, EmploymentStatus, HousingStatus, IncomeSourceId, PersonalInfo,
    Vehicle, VehicleId,
};
use loan_core::session::{Step, StepFields, StepWizard, WizardPhase};

#[derive(Parser, Debug)]
#[command(name = "loan-wizard")]
#[command(version, about = "Interactive auto-loan application wizard", long_about = None)]
struct Args {
    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

/// Front-end session: the wizard plus the drafts being edited.
///
/// The drafts mirror what the form fields would hold on screen; every
/// edit is re-recorded into the wizard so the write-on-exit commit
/// always sees the latest values.
struct Session {
    wizard: StepWizard,
    inventory: Vec<Vehicle>,
    personal: PersonalInfo,
    address: AddressInfo,
    employment: EmploymentInfo,
}

impl Session {
    fn new() -> Self {
        Self {
            wizard: StepWizard::new(),
            inventory: catalog::sample_inventory(),
            personal: PersonalInfo::default(),
            address: AddressInfo::default(),
            employment: EmploymentInfo::default(),
        }
    }

    fn sync_drafts(&mut self) {
        self.wizard
            .record_step_fields(StepFields::Personal(self.personal.clone()));
        self.wizard
            .record_step_fields(StepFields::Address(self.address.clone()));
        self.wizard
            .record_step_fields(StepFields::Employment(self.employment.clone()));
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log);

    let mut session = Session::new();

    println!("Auto-loan application. Type 'help' for commands, 'start' to begin.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        debug!(command = line, "handling command");
        dispatch(&mut session, line);

        if session.wizard.phase() == WizardPhase::Submitted {
            println!("Thank you! Your application has been submitted.");
            break;
        }
    }

    Ok(())
}

fn dispatch(
    session: &mut Session,
    line: &str,
) {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let result = match command {
        "help" => {
            print_help();
            Ok(())
        }
        "show" => {
            print_status(session);
            Ok(())
        }
        "vehicles" => {
            print_inventory(session);
            Ok(())
        }
        "start" => session
            .wizard
            .start()
            .map(|step| println!("Step {step} of 8"))
            .map_err(|e| e.to_string()),
        "select" => select_vehicle(session, rest),
        "favorite" => set_favorite(session, rest),
        "payment" => {
            session.wizard.state_mut().monthly_payment = payment_entry(rest);
            print_payment(session);
            Ok(())
        }
        "down" => {
            session.wizard.state_mut().down_payment = decimal_or_zero(rest);
            Ok(())
        }
        "warranty" => set_protection(session, rest, true),
        "gap" => set_protection(session, rest, false),
        "personal" => set_personal(session, rest),
        "address" => set_address(session, rest),
        "employment" => set_employment(session, rest),
        "hire" => set_hire_date(session, rest),
        "income" => income_command(session, rest),
        "estimate" => estimate_command(rest),
        "agree" => {
            session.wizard.state_mut().terms_agreed = true;
            Ok(())
        }
        "goto" => navigate(session, Step::new(int_or_zero(rest) as u8)),
        "next" => navigate(session, session.wizard.current_step().and_then(Step::next)),
        "back" => navigate(
            session,
            session.wizard.current_step().and_then(Step::previous),
        ),
        "submit" => submit(session),
        _ => Err(format!("unknown command '{command}' (try 'help')")),
    };

    if let Err(message) = result {
        println!("! {message}");
    }
}

fn navigate(
    session: &mut Session,
    target: Option<Step>,
) -> Result<(), String> {
    let target = target.ok_or("no such step")?;

    if !session.wizard.can_advance()
        && session.wizard.current_step().is_some_and(|s| s < target)
    {
        return Err("complete this step before moving on".to_string());
    }

    let transition = session.wizard.navigate_to(target).map_err(|e| e.to_string())?;

    // A screen would scroll to the top here.
    println!(
        "Step {} of 8 ({:.0}% complete)",
        transition.to, transition.progress
    );

    Ok(())
}

fn submit(session: &mut Session) -> Result<(), String> {
    if !session.wizard.can_submit() {
        return Err("agree to the terms first ('agree')".to_string());
    }

    session.wizard.submit().map_err(|e| e.to_string())
}

fn select_vehicle(
    session: &mut Session,
    rest: &str,
) -> Result<(), String> {
    let id = parse_vehicle_id(session, rest)?;
    session
        .wizard
        .state_mut()
        .vehicles
        .toggle(id)
        .map_err(|e| e.to_string())?;
    print_inventory(session);
    Ok(())
}

fn set_favorite(
    session: &mut Session,
    rest: &str,
) -> Result<(), String> {
    let id = parse_vehicle_id(session, rest)?;
    session
        .wizard
        .state_mut()
        .vehicles
        .set_favorite(id)
        .map_err(|e| e.to_string())?;
    print_inventory(session);
    Ok(())
}

fn parse_vehicle_id(
    session: &Session,
    rest: &str,
) -> Result<VehicleId, String> {
    let id = VehicleId(int_or_zero(rest));
    if session.inventory.iter().any(|v| v.id == id) {
        Ok(id)
    } else {
        Err(format!("no vehicle with id {id}"))
    }
}

fn set_protection(
    session: &mut Session,
    rest: &str,
    warranty: bool,
) -> Result<(), String> {
    let enabled = match rest {
        "on" => true,
        "off" => false,
        _ => return Err("expected 'on' or 'off'".to_string()),
    };

    let protection = &mut session.wizard.state_mut().protection;
    if warranty {
        protection.extended_warranty = enabled;
    } else {
        protection.gap_coverage = enabled;
    }

    print_payment(session);
    Ok(())
}

fn set_personal(
    session: &mut Session,
    rest: &str,
) -> Result<(), String> {
    let fields = split_record(rest, 4, "first, last, email, phone")?;
    session.personal = PersonalInfo {
        first_name: fields[0].clone(),
        last_name: fields[1].clone(),
        email: fields[2].clone(),
        phone: fields[3].clone(),
    };
    session.sync_drafts();
    Ok(())
}

fn set_address(
    session: &mut Session,
    rest: &str,
) -> Result<(), String> {
    let fields = split_record(rest, 4, "street, city, state, zip[, housing, years, months]")?;
    session.address = AddressInfo {
        street_address: fields[0].clone(),
        city: fields[1].clone(),
        state: fields[2].clone(),
        zip: fields[3].clone(),
        housing_status: fields.get(4).and_then(|s| HousingStatus::parse(s)),
        years_at_address: fields.get(5).map(|s| int_or_zero(s)).unwrap_or(0),
        months_at_address: fields.get(6).map(|s| int_or_zero(s)).unwrap_or(0),
    };
    session.sync_drafts();

    let bucket = duration_bucket(
        session.address.years_at_address,
        session.address.months_at_address,
    );
    if bucket.needs_previous_entry {
        println!("Less than 2 years at this address: a previous address will be required.");
    }

    Ok(())
}

fn set_employment(
    session: &mut Session,
    rest: &str,
) -> Result<(), String> {
    let fields = split_record(rest, 4, "status, employer, title, income[, years, months]")?;
    let status = EmploymentStatus::parse(&fields[0])
        .ok_or("status must be employed, self-employed, retired or other-income")?;

    session.employment = EmploymentInfo {
        status,
        employer: fields[1].clone(),
        job_title: fields[2].clone(),
        monthly_income: decimal_or_zero(&fields[3]),
        years_at_job: fields.get(4).map(|s| int_or_zero(s)).unwrap_or(0),
        months_at_job: fields.get(5).map(|s| int_or_zero(s)).unwrap_or(0),
        hire_date: session.employment.hire_date,
    };
    session.sync_drafts();

    if !status.has_employer_details() {
        println!("No employer details needed for this status.");
    } else {
        let bucket = duration_bucket(
            session.employment.years_at_job,
            session.employment.months_at_job,
        );
        if bucket.needs_previous_entry {
            println!("Less than 2 years at this job: a previous employer will be required.");
        }
    }

    Ok(())
}

fn set_hire_date(
    session: &mut Session,
    rest: &str,
) -> Result<(), String> {
    let hire_date: NaiveDate = rest
        .parse()
        .map_err(|_| "expected a date like 2023-06-01".to_string())?;

    let today = Local::now().date_naive();
    let tenure = job_tenure_from_hire_date(hire_date, today)
        .ok_or("hire date is in the future")?;

    session.employment.hire_date = Some(hire_date);
    session.employment.years_at_job = tenure.years;
    session.employment.months_at_job = tenure.months;
    session.sync_drafts();

    println!(
        "Time at job: {} year(s), {} month(s)",
        tenure.years, tenure.months
    );
    Ok(())
}

fn income_command(
    session: &mut Session,
    rest: &str,
) -> Result<(), String> {
    let (action, rest) = match rest.split_once(' ') {
        Some((action, rest)) => (action, rest.trim()),
        None => (rest, ""),
    };

    let ledger = &mut session.wizard.state_mut().additional_income;
    match action {
        "add" => {
            let fields = split_record(rest, 2, "kind, amount")?;
            let id = ledger.add(&fields[0], &fields[1]).map_err(|e| e.to_string())?;
            println!("Added income source #{id}");
            Ok(())
        }
        "rm" => {
            let id = IncomeSourceId(u64::from(int_or_zero(rest)));
            if ledger.remove(id) {
                Ok(())
            } else {
                Err(format!("no income source #{id}"))
            }
        }
        "list" => {
            if ledger.is_empty() {
                println!("No additional income sources.");
            }
            for entry in ledger.entries() {
                println!("  #{} {} ${}/month", entry.id, entry.kind, entry.amount);
            }
            Ok(())
        }
        _ => Err("expected 'income add <kind>, <amount>', 'income rm <id>' or 'income list'"
            .to_string()),
    }
}

fn estimate_command(rest: &str) -> Result<(), String> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    match parts.as_slice() {
        &["hourly", rate, hours] => {
            println!(
                "Estimated monthly income: ${}",
                estimated_hourly_income(rate, hours)
            );
            Ok(())
        }
        &["salary", amount, period] => {
            println!(
                "Estimated monthly income: ${}",
                estimated_salary_income(amount, period)
            );
            Ok(())
        }
        _ => Err("expected 'estimate hourly <rate> <hours>' or 'estimate salary <amount> <period>'"
            .to_string()),
    }
}

/// Splits a comma-separated record, requiring at least `min` fields.
fn split_record(
    rest: &str,
    min: usize,
    usage: &str,
) -> Result<Vec<String>, String> {
    let fields: Vec<String> = rest.split(',').map(|f| f.trim().to_string()).collect();
    if fields.len() < min || fields.iter().take(min).any(|f| f.is_empty()) {
        return Err(format!("expected: {usage}"));
    }
    Ok(fields)
}

fn print_payment(session: &Session) {
    let state = session.wizard.state();
    println!(
        "Base payment ${}/month, total with protection ${}/month",
        state.monthly_payment,
        state.total_monthly_payment()
    );
}

fn print_inventory(session: &Session) {
    let selection = &session.wizard.state().vehicles;
    for vehicle in &session.inventory {
        let marker = if selection.favorite() == Some(vehicle.id) {
            "*"
        } else if selection.contains(vehicle.id) {
            "+"
        } else {
            " "
        };
        println!(
            " {marker} [{}] {} starting at ${}",
            vehicle.id, vehicle, vehicle.price
        );
    }
    println!(
        "{} of 5 selected ('+' selected, '*' favorite)",
        selection.len()
    );
}

fn print_status(session: &Session) {
    let wizard = &session.wizard;
    let state = wizard.state();

    match wizard.phase() {
        WizardPhase::Landing => println!("On the landing screen; type 'start' to begin."),
        WizardPhase::InProgress(step) => println!(
            "Step {step} of 8 ({:.0}% complete)",
            wizard.progress_percent()
        ),
        WizardPhase::Submitted => println!("Application submitted."),
    }

    print_payment(session);
    println!("Down payment: ${}", state.down_payment);
    println!(
        "Vehicles selected: {}, favorite: {}",
        state.vehicles.len(),
        state
            .vehicles
            .favorite()
            .map_or("none".to_string(), |id| id.to_string())
    );
    if let Some(personal) = &state.personal {
        println!("Applicant: {} {}", personal.first_name, personal.last_name);
    }
    if state.additional_income.has_entries() {
        println!(
            "Additional income sources: {}",
            state.additional_income.entries().len()
        );
    }
    println!(
        "Terms agreed: {}",
        if state.terms_agreed { "yes" } else { "no" }
    );
}

fn print_help() {
    println!(
        "\
Commands:
  start                                   begin the application
  vehicles                                list the inventory
  select <id> / favorite <id>             manage the shortlist (max 5)
  payment <amount>                        set base payment (200-1000)
  down <amount>                           set the down payment
  warranty on|off / gap on|off            protection options
  personal <first>, <last>, <email>, <phone>
  address <street>, <city>, <state>, <zip>[, <housing>, <years>, <months>]
  employment <status>, <employer>, <title>, <income>[, <years>, <months>]
  hire <YYYY-MM-DD>                       derive time at job from hire date
  income add <kind>, <amount> | rm <id> | list
  estimate hourly <rate> <hours> | salary <amount> <period>
  agree                                   accept the terms
  next / back / goto <n>                  move between steps
  submit                                  submit the application
  show / help / quit"
    );
}
