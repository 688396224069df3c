//! Compute unit report for every instruction. Needs the program built with `cargo build-sbf`.

use mollusk_svm_bencher::MolluskComputeUnitBencher;

#[path = "../tests/utils/mod.rs"]
mod utils;

fn main() {
    let mollusk = utils::mollusk();

    let (counter, counter_account) = utils::empty_address();
    let (authority, authority_account) = utils::wallet();
    let fresh = vec![
        (counter, counter_account),
        (authority, authority_account),
        utils::system_program(),
    ];

    let initialize = utils::initialize(counter, authority, 50);
    let created = mollusk
        .process_instruction(&initialize, &fresh)
        .resulting_accounts;

    let update = utils::update(counter, authority, 7);
    let add = utils::add(counter, authority, 1);
    let subtract = utils::subtract(counter, authority, 1);
    let terminate = utils::terminate(counter, authority);

    MolluskComputeUnitBencher::new(mollusk)
        .bench(("initialize", &initialize, &fresh))
        .bench(("update", &update, &created))
        .bench(("add", &add, &created))
        .bench(("subtract", &subtract, &created))
        .bench(("terminate", &terminate, &created))
        .must_pass(true)
        .out_dir("benches/")
        .execute();
}
