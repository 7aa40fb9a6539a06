use serde::Deserialize;
use sqlx::FromRow;

pub const TABLE_NAME: &str = "idoso";

#[derive(Clone, Debug, Deserialize, FromRow, PartialEq)]
pub struct Idoso {
    pub id: i64,
    pub nome: String,
    pub idade: i64,
    pub nome_responsavel: String,
    pub celular_responsavel: String,
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
}

/// Field values for a row that has not been assigned an id yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewIdoso {
    pub nome: String,
    pub idade: i64,
    pub nome_responsavel: String,
    pub celular_responsavel: String,
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
}

impl NewIdoso {
    pub fn with_id(self, id: i64) -> Idoso {
        Idoso {
            id,
            nome: self.nome,
            idade: self.idade,
            nome_responsavel: self.nome_responsavel,
            celular_responsavel: self.celular_responsavel,
            cep: self.cep,
            logradouro: self.logradouro,
            numero: self.numero,
            bairro: self.bairro,
            cidade: self.cidade,
            uf: self.uf,
        }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct IdosoPatch {
    pub nome: Option<String>,
    pub idade: Option<i64>,
    pub nome_responsavel: Option<String>,
    pub celular_responsavel: Option<String>,
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
}

impl IdosoPatch {
    pub fn apply(self, idoso: &mut Idoso) {
        if let Some(val) = self.nome {
            idoso.nome = val;
        }
        if let Some(val) = self.idade {
            idoso.idade = val;
        }
        if let Some(val) = self.nome_responsavel {
            idoso.nome_responsavel = val;
        }
        if let Some(val) = self.celular_responsavel {
            idoso.celular_responsavel = val;
        }
        if let Some(val) = self.cep {
            idoso.cep = val;
        }
        if let Some(val) = self.logradouro {
            idoso.logradouro = val;
        }
        if let Some(val) = self.numero {
            idoso.numero = val;
        }
        if let Some(val) = self.bairro {
            idoso.bairro = val;
        }
        if let Some(val) = self.cidade {
            idoso.cidade = val;
        }
        if let Some(val) = self.uf {
            idoso.uf = val;
        }
    }
}
