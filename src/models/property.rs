//! # 부동산(Property) 모델 정의
//!
//! `imoveis` 테이블 한 행과, 생성/수정 요청 본문을 표현하는 구조체들입니다.
//!
//! ## 구조체 역할
//! - `Property`: DB에서 읽은 부동산 한 건 (응답용)
//! - `PropertyInput`: `POST`/`PUT` 요청 본문에서 검증을 통과한 필드들
//!
//! Rust 필드 이름은 영어로, JSON 키와 컬럼 이름은 기존 API 그대로(포르투갈어) 유지합니다.
//! serde는 구조체 필드 선언 순서대로 직렬화하므로, 필드 순서가 곧 응답의 키 순서입니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// 부동산 엔티티: DB의 `imoveis` 테이블 한 행(row)에 대응합니다.
///
/// 필드 순서(id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao)를
/// 바꾸면 응답 JSON의 키 순서도 바뀝니다.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Property {
    /// 저장소가 생성 시 한 번만 부여하는 식별자
    pub id: i64,
    #[serde(rename = "logradouro")]
    #[sqlx(rename = "logradouro")]
    pub street_name: String,
    #[serde(rename = "tipo_logradouro")]
    #[sqlx(rename = "tipo_logradouro")]
    pub street_type: String,
    #[serde(rename = "bairro")]
    #[sqlx(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    #[sqlx(rename = "cidade")]
    pub city: String,
    #[serde(rename = "cep")]
    #[sqlx(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "tipo")]
    #[sqlx(rename = "tipo")]
    pub property_type: String,
    /// 음수가 아니어야 하지만 검증하지 않습니다.
    #[serde(rename = "valor")]
    #[sqlx(rename = "valor")]
    pub value: f64,
    /// ISO `YYYY-MM-DD` 문자열
    #[serde(rename = "data_aquisicao")]
    #[sqlx(rename = "data_aquisicao")]
    pub acquisition_date: String,
}

/// 생성/수정 요청 본문: `id`를 제외한 여덟 개 필드가 모두 필수입니다.
///
/// 알 수 없는 키(예: 수정 요청의 `"id"`)는 serde 기본 동작대로 무시됩니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyInput {
    #[serde(rename = "logradouro")]
    pub street_name: String,
    #[serde(rename = "tipo_logradouro")]
    pub street_type: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "tipo")]
    pub property_type: String,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "data_aquisicao")]
    pub acquisition_date: String,
}

impl PropertyInput {
    /// 요청 본문(JSON 값)을 검증하여 `PropertyInput`으로 변환합니다.
    ///
    /// 저장소에 접근하기 전에 호출되며, 실패하면 400 응답이 됩니다.
    ///
    /// # 에러
    /// - 본문이 JSON 객체가 아닌 경우
    /// - 필수 필드가 없거나 타입이 맞지 않는 경우
    /// - 문자열 필드가 비어 있는 경우
    /// - `data_aquisicao`가 `YYYY-MM-DD` 형식의 실제 날짜가 아닌 경우
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::BadRequest(
                "O corpo da requisição deve ser um objeto JSON".to_string(),
            ));
        }

        // from_value는 Value를 소비하므로 복제본을 넘깁니다.
        // 원본 body는 생성 응답에서 그대로 에코해야 합니다.
        let input: PropertyInput = serde_json::from_value(body.clone())
            .map_err(|e| AppError::BadRequest(format!("Dados do imóvel inválidos: {}", e)))?;

        input.validate()?;
        Ok(input)
    }

    fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("logradouro", &self.street_name),
            ("tipo_logradouro", &self.street_type),
            ("bairro", &self.neighborhood),
            ("cidade", &self.city),
            ("cep", &self.postal_code),
            ("tipo", &self.property_type),
            ("data_aquisicao", &self.acquisition_date),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::BadRequest(format!(
                "O campo '{}' é obrigatório",
                field
            )));
        }

        if NaiveDate::parse_from_str(&self.acquisition_date, "%Y-%m-%d").is_err() {
            return Err(AppError::BadRequest(
                "O campo 'data_aquisicao' deve estar no formato AAAA-MM-DD".to_string(),
            ));
        }

        Ok(())
    }
}

/// 생성 요청에 클라이언트가 `id`를 보냈는지 확인합니다.
///
/// `id`는 저장소만 부여할 수 있으므로, 있으면 400으로 거절합니다.
pub fn reject_client_id(body: &Value) -> Result<(), AppError> {
    if body.get("id").is_some() {
        return Err(AppError::BadRequest(
            "O campo 'id' é gerado pelo servidor e não deve ser enviado".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> Value {
        json!({
            "logradouro": "Rua Elvira Ferraz",
            "tipo_logradouro": "Rua",
            "bairro": "Vila olimpia",
            "cidade": "São Paulo",
            "cep": "12345678",
            "tipo": "apartamento",
            "valor": 1000000.00,
            "data_aquisicao": "2020-01-01"
        })
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn property_serializes_in_column_order() {
        let property = Property {
            id: 1,
            street_name: "José Eiras Pinheiro".to_string(),
            street_type: "Rua".to_string(),
            neighborhood: "Barra da Tijuca".to_string(),
            city: "Rio de Janeiro".to_string(),
            postal_code: "21240004".to_string(),
            property_type: "casa em condomínio".to_string(),
            value: 150000.00,
            acquisition_date: "2018-01-31".to_string(),
        };

        let value = serde_json::to_value(&property).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            [
                "id",
                "logradouro",
                "tipo_logradouro",
                "bairro",
                "cidade",
                "cep",
                "tipo",
                "valor",
                "data_aquisicao"
            ]
        );
    }

    #[test]
    fn accepts_complete_body() {
        let input = PropertyInput::from_json(&sample_body()).unwrap();
        assert_eq!(input.street_name, "Rua Elvira Ferraz");
        assert_eq!(input.city, "São Paulo");
        assert_eq!(input.value, 1000000.00);
    }

    #[test]
    fn accepts_integer_value() {
        let mut body = sample_body();
        body["valor"] = json!(250000);
        assert_eq!(PropertyInput::from_json(&body).unwrap().value, 250000.0);
    }

    #[test]
    fn ignores_id_in_body() {
        let mut body = sample_body();
        body["id"] = json!(2);
        assert!(PropertyInput::from_json(&body).is_ok());
    }

    #[test]
    fn rejects_missing_field() {
        let mut body = sample_body();
        body.as_object_mut().unwrap().remove("cep");
        let msg = message(PropertyInput::from_json(&body).unwrap_err());
        assert!(msg.contains("cep"), "{}", msg);
    }

    #[test]
    fn rejects_wrong_type() {
        let mut body = sample_body();
        body["valor"] = json!("caro");
        assert!(matches!(
            PropertyInput::from_json(&body),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_blank_string() {
        let mut body = sample_body();
        body["bairro"] = json!("   ");
        let msg = message(PropertyInput::from_json(&body).unwrap_err());
        assert_eq!(msg, "O campo 'bairro' é obrigatório");
    }

    #[test]
    fn rejects_non_iso_date() {
        let mut body = sample_body();
        body["data_aquisicao"] = json!("01/01/2020");
        let msg = message(PropertyInput::from_json(&body).unwrap_err());
        assert!(msg.contains("data_aquisicao"));

        body["data_aquisicao"] = json!("2020-02-30");
        assert!(PropertyInput::from_json(&body).is_err());
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(PropertyInput::from_json(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn client_supplied_id_is_rejected() {
        assert!(reject_client_id(&sample_body()).is_ok());

        let mut body = sample_body();
        body["id"] = json!(7);
        assert!(reject_client_id(&body).is_err());
    }
}
