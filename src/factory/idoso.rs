use fake::{
    faker::{
        address::en::{CityName, StateAbbr, StreetName},
        name::en::Name,
        phone_number::en::PhoneNumber,
    },
    Dummy, Fake, Faker,
};
use sqlx::SqlitePool;

use crate::model::idoso::{Idoso, NewIdoso, TABLE_NAME};

pub struct IdosoFactory<T: Clone> {
    modifier_one: fn(x: &NewIdoso, ext: T) -> NewIdoso,
    modifier_many: fn(x: &NewIdoso, idx: usize, ext: T) -> NewIdoso,
}

impl<T: Clone> Default for IdosoFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> IdosoFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &NewIdoso, ext: T) -> NewIdoso) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &NewIdoso, idx: usize, ext: T) -> NewIdoso) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &SqlitePool, ext: T) -> anyhow::Result<Idoso> {
        let data = IdosoDummy::generate_one();
        let data = (self.modifier_one)(&data, ext);
        let mut conn = db.acquire().await?;
        let id = insert(&mut conn, &data).await?;
        Ok(data.with_id(id))
    }

    pub async fn generate_many(
        &mut self,
        db: &SqlitePool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Idoso>> {
        let data = IdosoDummy::generate_many(num);
        let mut result: Vec<Idoso> = vec![];
        let mut tx = db.begin().await?;
        for (idx, item) in data.iter().enumerate() {
            let item = (self.modifier_many)(item, idx, ext.clone());
            let id = insert(&mut tx, &item).await?;
            result.push(item.with_id(id));
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert(conn: &mut sqlx::SqliteConnection, data: &NewIdoso) -> anyhow::Result<i64> {
    let result = sqlx::query(format!(r#"
    INSERT INTO {} (nome, idade, nome_responsavel, celular_responsavel, cep, logradouro, numero, bairro, cidade, uf)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#, TABLE_NAME).as_str())
    .bind(&data.nome)
    .bind(data.idade)
    .bind(&data.nome_responsavel)
    .bind(&data.celular_responsavel)
    .bind(&data.cep)
    .bind(&data.logradouro)
    .bind(&data.numero)
    .bind(&data.bairro)
    .bind(&data.cidade)
    .bind(&data.uf)
    .execute(conn).await?;
    Ok(result.last_insert_rowid())
}

#[derive(Debug, Dummy, Clone)]
struct IdosoDummy {
    #[dummy(faker = "Name()")]
    pub nome: String,
    #[dummy(faker = "60..105")]
    pub idade: i64,
    #[dummy(faker = "Name()")]
    pub nome_responsavel: String,
    #[dummy(faker = "PhoneNumber()")]
    pub celular_responsavel: String,
    #[dummy(faker = "1000000..99999999")]
    pub cep: u32,
    #[dummy(faker = "StreetName()")]
    pub logradouro: String,
    #[dummy(faker = "1..9999")]
    pub numero: u32,
    #[dummy(faker = "CityName()")]
    pub bairro: String,
    #[dummy(faker = "CityName()")]
    pub cidade: String,
    #[dummy(faker = "StateAbbr()")]
    pub uf: String,
}

impl IdosoDummy {
    fn into_new_idoso(self) -> NewIdoso {
        NewIdoso {
            nome: self.nome,
            idade: self.idade,
            nome_responsavel: self.nome_responsavel,
            celular_responsavel: self.celular_responsavel,
            cep: format!("{:08}", self.cep),
            logradouro: self.logradouro,
            numero: self.numero.to_string(),
            bairro: self.bairro,
            cidade: self.cidade,
            uf: self.uf,
        }
    }

    pub fn generate_one() -> NewIdoso {
        Faker.fake::<Self>().into_new_idoso()
    }

    pub fn generate_many(num: u32) -> Vec<NewIdoso> {
        let mut result: Vec<NewIdoso> = vec![];
        for _ in 0..num {
            result.push(Faker.fake::<Self>().into_new_idoso());
        }
        result
    }
}
