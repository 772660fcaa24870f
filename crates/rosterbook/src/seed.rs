//! Bootstrap dataset for rosterbook.
//!
//! When no usable snapshot exists on disk, the store materializes this fixed
//! seed list, assigning each entry a fresh unique id.

use crate::student::StudentRecord;

/// The fixed seed entries: first name, last name, email, graduation year,
/// image reference. Ids are assigned at materialization time.
const SEED_ENTRIES: [(&str, &str, &str, i32, &str); 10] = [
    (
        "Tommi",
        "Ludlow",
        "tludlow0@friendfeed.com",
        2001,
        "images/student1.jpg",
    ),
    (
        "Hewe",
        "Simonot",
        "hsimonot1@hostgator.com",
        2001,
        "images/student2.jpg",
    ),
    (
        "Killian",
        "Greaves",
        "kgreaves2@economist.com",
        2001,
        "images/student3.jpg",
    ),
    (
        "Rozanne",
        "Westpfel",
        "rwestpfel3@jimdo.com",
        2002,
        "images/student4.jpg",
    ),
    (
        "Gilly",
        "Foden",
        "gfoden4@cbc.ca",
        2002,
        "images/student5.jpg",
    ),
    (
        "Reynold",
        "Bundock",
        "rbundock5@berkeley.edu",
        2003,
        "images/student6.jpg",
    ),
    (
        "Ode",
        "Metzke",
        "ometzke6@nytimes.com",
        2003,
        "images/student7.jpg",
    ),
    (
        "Mair",
        "Blaxlande",
        "mblaxlande7@twitpic.com",
        2003,
        "images/student8.jpg",
    ),
    (
        "Sada",
        "Ivchenko",
        "sivchenko8@intel.com",
        2004,
        "images/student9.jpg",
    ),
    (
        "Sharl",
        "McGreay",
        "smcgreay9@jugem.jp",
        2004,
        "images/student10.jpg",
    ),
];

/// Materialize the bootstrap dataset, assigning each entry a fresh id.
#[must_use]
pub fn bootstrap_roster() -> Vec<StudentRecord> {
    SEED_ENTRIES
        .iter()
        .map(|&(first_name, last_name, email, grad_year, image)| {
            StudentRecord::new(first_name, last_name, email, grad_year, image)
        })
        .collect()
}
