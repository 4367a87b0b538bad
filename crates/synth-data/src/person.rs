//! Names, phone numbers and job titles.

use rand::Rng;

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda", "Brian",
    "Dorothy", "George", "Melissa", "Timothy", "Deborah",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

const JOB_TITLES: &[&str] = &[
    "Accountant",
    "Software Engineer",
    "Sales Manager",
    "Data Analyst",
    "Operations Coordinator",
    "Marketing Specialist",
    "Product Manager",
    "Customer Support Agent",
    "HR Generalist",
    "Financial Controller",
    "Logistics Planner",
    "Quality Assurance Tester",
    "Business Analyst",
    "Systems Administrator",
    "Procurement Officer",
    "Research Scientist",
    "Technical Writer",
    "Account Executive",
    "Warehouse Supervisor",
    "Legal Counsel",
    "Compliance Officer",
    "UX Designer",
    "Project Coordinator",
    "Field Technician",
];

/// Random given name.
pub fn first_name<R: Rng>(rng: &mut R) -> &'static str {
    FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())]
}

/// Random family name.
pub fn last_name<R: Rng>(rng: &mut R) -> &'static str {
    LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
}

/// "First Last".
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", first_name(rng), last_name(rng))
}

/// Random job title, usable as a department-ish label.
pub fn job<R: Rng>(rng: &mut R) -> &'static str {
    JOB_TITLES[rng.gen_range(0..JOB_TITLES.len())]
}

/// Phone number in one of a few common North-American renderings.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let area = rng.gen_range(200..=989);
    let exchange = rng.gen_range(200..=999);
    let line = rng.gen_range(0..=9999);
    match rng.gen_range(0..4) {
        0 => format!("({area}) {exchange}-{line:04}"),
        1 => format!("{area}-{exchange}-{line:04}"),
        2 => format!("+1-{area}-{exchange}-{line:04}"),
        _ => format!("{area}.{exchange}.{line:04}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_has_two_parts() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let name = full_name(&mut rng);
            assert_eq!(name.split(' ').count(), 2);
        }
    }

    #[test]
    fn test_phone_number_contains_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let phone = phone_number(&mut rng);
            assert!(phone.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(full_name(&mut rng1), full_name(&mut rng2));
            assert_eq!(phone_number(&mut rng1), phone_number(&mut rng2));
        }
    }
}
