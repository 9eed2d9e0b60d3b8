//! # 부동산(imoveis) 데이터베이스 쿼리 모듈
//!
//! `imoveis` 테이블에 대한 CRUD 쿼리 함수들입니다.
//!
//! 모든 함수는 호출자가 연 연결(`&mut SqliteConnection`)을 빌려 씁니다.
//! 연결을 열고 닫는 책임은 핸들러에 있습니다 (`Database::connect`/`release`).
//! 모든 값은 `?` 자리표시자에 바인딩하며, SQL 문자열을 이어 붙이지 않습니다.

use sqlx::{Connection, SqliteConnection};

use crate::error::AppError;
use crate::models::{Property, PropertyInput};

/// 조회 쿼리 공통 SELECT 절
///
/// 컬럼 순서는 `Property` 필드 순서와 같아야 합니다.
const SELECT_PROPERTY: &str = r#"
    SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao
    FROM imoveis
"#;

/// 모든 부동산을 id 순으로 조회합니다.
pub async fn list_properties(conn: &mut SqliteConnection) -> Result<Vec<Property>, AppError> {
    let sql = format!("{SELECT_PROPERTY} ORDER BY id");
    let rows = sqlx::query_as::<_, Property>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// ID로 부동산 한 건을 조회합니다.
///
/// # 반환값
/// - `Ok(Some(Property))`: 찾은 경우
/// - `Ok(None)`: 해당 ID가 없는 경우 (핸들러에서 404로 변환)
pub async fn get_property(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Property>, AppError> {
    let sql = format!("{SELECT_PROPERTY} WHERE id = ?");
    let row = sqlx::query_as::<_, Property>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// 유형(`tipo`)이 정확히 일치하는 부동산을 조회합니다.
pub async fn list_properties_by_type(
    conn: &mut SqliteConnection,
    property_type: &str,
) -> Result<Vec<Property>, AppError> {
    let sql = format!("{SELECT_PROPERTY} WHERE tipo = ? ORDER BY id");
    let rows = sqlx::query_as::<_, Property>(&sql)
        .bind(property_type)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// 도시(`cidade`)가 정확히 일치하는 부동산을 조회합니다.
pub async fn list_properties_by_city(
    conn: &mut SqliteConnection,
    city: &str,
) -> Result<Vec<Property>, AppError> {
    let sql = format!("{SELECT_PROPERTY} WHERE cidade = ? ORDER BY id");
    let rows = sqlx::query_as::<_, Property>(&sql)
        .bind(city)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// 수정/삭제 전에 대상이 존재하는지 확인합니다 (existence check).
///
/// 행 전체가 아니라 `id` 한 컬럼만 읽어 존재 여부만 판단합니다.
pub async fn property_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM imoveis WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}

/// 새 부동산을 저장하고 저장소가 부여한 id를 반환합니다.
///
/// 응답에는 이 id가 포함되지 않지만, 로그 추적을 위해 호출자에게 돌려줍니다.
pub async fn create_property(
    conn: &mut SqliteConnection,
    input: &PropertyInput,
) -> Result<i64, AppError> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query(
        r#"
        INSERT INTO imoveis
            (logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.street_name)
    .bind(&input.street_type)
    .bind(&input.neighborhood)
    .bind(&input.city)
    .bind(&input.postal_code)
    .bind(&input.property_type)
    .bind(input.value)
    .bind(&input.acquisition_date)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(result.last_insert_rowid())
}

/// 부동산의 모든 필드(id 제외)를 덮어씁니다.
///
/// # 반환값
/// 변경된 행 수 (존재 확인을 먼저 했다면 1)
pub async fn update_property(
    conn: &mut SqliteConnection,
    id: i64,
    input: &PropertyInput,
) -> Result<u64, AppError> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query(
        r#"
        UPDATE imoveis
        SET logradouro = ?, tipo_logradouro = ?, bairro = ?, cidade = ?,
            cep = ?, tipo = ?, valor = ?, data_aquisicao = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.street_name)
    .bind(&input.street_type)
    .bind(&input.neighborhood)
    .bind(&input.city)
    .bind(&input.postal_code)
    .bind(&input.property_type)
    .bind(input.value)
    .bind(&input.acquisition_date)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(result.rows_affected())
}

/// 부동산을 삭제합니다.
///
/// # 반환값
/// 삭제된 행 수
pub async fn delete_property(conn: &mut SqliteConnection, id: i64) -> Result<u64, AppError> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query("DELETE FROM imoveis WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(result.rows_affected())
}
