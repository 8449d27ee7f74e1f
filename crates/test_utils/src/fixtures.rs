//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the grant review workflow. The
//! reference roster and application mirror the population the server seeds
//! at startup.

use core_kernel::{Currency, Money};
use domain_grants::ApplicationData;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Amount requested by the reference application
    pub fn usd_requested() -> Money {
        Money::new(dec!(50000), Currency::USD)
    }

    /// Amount granted in the reference decision
    pub fn usd_granted() -> Money {
        Money::new(dec!(40000), Currency::USD)
    }

    /// More than the reference application requested
    pub fn usd_above_request() -> Money {
        Money::new(dec!(75000), Currency::USD)
    }

    /// Ceiling of the reference funding programme, above the reference request
    pub fn usd_grant_ceiling() -> Money {
        Money::new(dec!(60000), Currency::USD)
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    pub fn usd_negative() -> Money {
        Money::new(dec!(-1.00), Currency::USD)
    }
}

/// One expert registration: name, specialization, degree
pub type ExpertSpec = (&'static str, &'static str, &'static str);

/// Fixture for expert rosters
pub struct ExpertFixtures;

impl ExpertFixtures {
    /// Reference roster: bio/PhD, bio/Master, chemistry/PhD
    pub const REFERENCE: [ExpertSpec; 3] = [
        ("Gustavo Fring", "bio", "PhD"),
        ("Jesse Pinkman", "bio", "Master"),
        ("Walter White", "chemistry", "PhD"),
    ];

    /// Three standard-tier experts sharing one specialization
    pub const BIO_TRIO: [ExpertSpec; 3] = [
        ("E1", "bio", "Master"),
        ("E2", "bio", "Master"),
        ("E3", "bio", "Master"),
    ];
}

/// Fixture for application content
pub struct ApplicationFixtures;

impl ApplicationFixtures {
    pub fn bio_title() -> &'static str {
        "[Bio] Molecular clock research"
    }

    /// Title no reference specialization matches
    pub fn unmatched_title() -> &'static str {
        "[Astro] Exoplanet survey"
    }

    /// The reference application data, 50000 USD
    pub fn bio_data() -> ApplicationData {
        Self::data(Self::bio_title())
    }

    pub fn unmatched_data() -> ApplicationData {
        Self::data(Self::unmatched_title())
    }

    fn data(title: &str) -> ApplicationData {
        match ApplicationData::new(title, "Reference proposal", MoneyFixtures::usd_requested()) {
            Ok(data) => data,
            Err(err) => panic!("fixture data must be valid: {err}"),
        }
    }
}

/// Fixture for people
pub struct PersonFixtures;

impl PersonFixtures {
    pub fn applicant_name() -> &'static str {
        "Skyler White"
    }

    pub fn founder_name() -> &'static str {
        "Gregory House"
    }

    /// A generated display name
    pub fn random_name() -> String {
        Name().fake()
    }

    /// A generated email address
    pub fn random_email() -> String {
        SafeEmail().fake()
    }
}
