use chrono::NaiveDate;
use ewallet_repo::transaction_repo::{NewTransaction, TransactionUpdate};
use ewallet_repo::transfer_repo::{NewTransfer, TransferUpdate};
use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

pub trait Generator<T> {
    fn gen(&mut self) -> T;
}

pub struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    pub fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

pub struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    pub fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

pub struct FakeGenerator<F: Fake> {
    fake: F,
}

impl<F: Fake> FakeGenerator<F> {
    pub fn boxed(fake: F) -> Box<FakeGenerator<F>> {
        Box::new(FakeGenerator { fake })
    }
}

impl<T: fake::Dummy<F>, F> Generator<T> for FakeGenerator<F> {
    fn gen(&mut self) -> T {
        self.fake.fake()
    }
}

/// Positive amount with two decimal places.
pub struct FakeValue;

impl Generator<Decimal> for FakeValue {
    fn gen(&mut self) -> Decimal {
        Decimal::new((1i64..1_000_000).fake::<i64>(), 2)
    }
}

pub struct FakeDate;

impl Generator<NaiveDate> for FakeDate {
    fn gen(&mut self) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            (2000i32..2030).fake::<i32>(),
            (1u32..13).fake::<u32>(),
            (1u32..29).fake::<u32>(),
        )
        .unwrap()
    }
}

pub struct NewTransactionGenerator {
    account_id: i64,
    cat_gen: Box<dyn Generator<String>>,
    date_gen: Box<dyn Generator<NaiveDate>>,
    note_gen: Box<dyn Generator<Option<String>>>,
    value_gen: Box<dyn Generator<Decimal>>,
}

#[allow(dead_code)]
impl NewTransactionGenerator {
    pub fn new(account_id: i64) -> NewTransactionGenerator {
        NewTransactionGenerator {
            account_id,
            cat_gen: RandomSample::boxed(vec![
                "Misc".to_string(),
                "Groceries".to_string(),
                "Eating Out".to_string(),
                "Transportation".to_string(),
            ]),
            date_gen: Box::new(FakeDate),
            note_gen: FakeGenerator::boxed(Sentence(5..10)),
            value_gen: Box::new(FakeValue),
        }
    }

    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> NewTransactionGenerator {
        self.date_gen = Predefined::boxed(dates);
        self
    }

    pub fn generate(&mut self) -> NewTransaction {
        NewTransaction::new(
            self.account_id,
            self.cat_gen.gen(),
            self.date_gen.gen(),
            self.note_gen.gen(),
            self.value_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransaction> {
        (0..count).map(|_| self.generate()).collect()
    }

    pub fn generate_update(&mut self) -> TransactionUpdate {
        TransactionUpdate::new(
            self.cat_gen.gen(),
            self.date_gen.gen(),
            self.note_gen.gen(),
            self.value_gen.gen(),
        )
    }
}

pub struct NewTransferGenerator {
    from_id: i64,
    to_id: i64,
    note_gen: Box<dyn Generator<Option<String>>>,
    value_gen: Box<dyn Generator<Decimal>>,
    date_gen: Box<dyn Generator<NaiveDate>>,
}

#[allow(dead_code)]
impl NewTransferGenerator {
    pub fn new(from_id: i64, to_id: i64) -> NewTransferGenerator {
        NewTransferGenerator {
            from_id,
            to_id,
            note_gen: FakeGenerator::boxed(Sentence(3..6)),
            value_gen: Box::new(FakeValue),
            date_gen: Box::new(FakeDate),
        }
    }

    pub fn with_values(mut self, values: Vec<Decimal>) -> NewTransferGenerator {
        self.value_gen = Predefined::boxed(values);
        self
    }

    pub fn generate(&mut self) -> NewTransfer {
        NewTransfer::new(
            self.from_id,
            self.to_id,
            self.note_gen.gen(),
            self.value_gen.gen(),
            self.date_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransfer> {
        (0..count).map(|_| self.generate()).collect()
    }

    pub fn generate_update(&mut self) -> TransferUpdate {
        TransferUpdate::new(
            Some(Faker.fake::<String>()),
            self.value_gen.gen(),
            self.date_gen.gen(),
        )
    }
}
