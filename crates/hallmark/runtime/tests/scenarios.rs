//! End-to-end scenarios against a full deployment.

use hallmark_runtime::{
    ArtisanRecord, Call, Deployment, DeploymentConfig, DesignId, MaterialId, NewDesign,
    NewMaterial, Outcome, Principal, Query, QueryResponse, RegistryError, RegistryKind, Sequence,
    Transaction,
};

const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const OTHER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

fn deployment() -> Deployment {
    Deployment::new(DeploymentConfig::with_deployer(ADMIN))
}

fn register_artisan(name: &str, credentials: &str) -> Call {
    Call::RegisterArtisan {
        name: name.into(),
        credentials: credentials.into(),
    }
}

#[test]
fn artisan_registration_and_verification() {
    let mut deployment = deployment();
    let receipt = deployment
        .apply(Transaction::new(
            ADMIN,
            100,
            register_artisan("John Doe", "Master Jeweler with 10 years experience"),
        ))
        .unwrap();
    assert_eq!(receipt.result, Ok(Outcome::ArtisanRegistered));

    assert_eq!(
        deployment.query(&Query::ArtisanDetails {
            artisan: ADMIN.into()
        }),
        QueryResponse::Artisan(Some(ArtisanRecord {
            name: "John Doe".into(),
            verified: false,
            verification_date: Sequence::ZERO,
            credentials: "Master Jeweler with 10 years experience".into(),
        }))
    );

    deployment
        .apply(Transaction::new(
            ADMIN,
            100,
            Call::VerifyArtisan {
                artisan: ADMIN.into(),
            },
        ))
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(
        deployment.query(&Query::IsVerified {
            artisan: ADMIN.into()
        }),
        QueryResponse::Verified(true)
    );
    let record = deployment.artisans().details(&ADMIN.into()).unwrap();
    assert_eq!(record.verification_date, Sequence(100));
}

#[test]
fn non_admin_artisan_registration_leaves_map_empty() {
    let mut deployment = deployment();
    let receipt = deployment
        .apply(Transaction::new(
            OTHER,
            100,
            register_artisan("Jane Smith", "Gemstone Expert"),
        ))
        .unwrap();

    assert_eq!(receipt.result.as_ref().unwrap_err().code(), 100);
    assert!(deployment.artisans().is_empty());
}

#[test]
fn verifying_unknown_artisan_is_not_found() {
    let mut deployment = deployment();
    let receipt = deployment
        .apply(Transaction::new(
            ADMIN,
            100,
            Call::VerifyArtisan {
                artisan: OTHER.into(),
            },
        ))
        .unwrap();

    assert!(matches!(receipt.result, Err(RegistryError::NotFound(_))));
}

#[test]
fn material_certification_assigns_dense_ids() {
    let mut deployment = deployment();
    for material in [
        NewMaterial::new("Gold", "Metal", "24K", "South Africa"),
        NewMaterial::new("Diamond", "Gemstone", "VS1", "Botswana"),
    ] {
        deployment
            .apply(Transaction::new(ADMIN, 100, Call::CertifyMaterial(material)))
            .unwrap()
            .into_result()
            .unwrap();
    }
    // A rejected certification in between must not burn an id.
    deployment
        .apply(Transaction::new(
            OTHER,
            101,
            Call::CertifyMaterial(NewMaterial::new("Silver", "Metal", "925", "Mexico")),
        ))
        .unwrap();

    assert_eq!(deployment.query(&Query::MaterialCount), QueryResponse::Count(2));
    assert_eq!(deployment.materials().details(MaterialId(1)).unwrap().name, "Gold");
    assert_eq!(deployment.materials().details(MaterialId(2)).unwrap().name, "Diamond");
    assert!(deployment.materials().details(MaterialId(3)).is_none());
}

#[test]
fn design_artisan_is_the_sender() {
    let mut deployment = deployment();
    let receipt = deployment
        .apply(Transaction::new(
            OTHER,
            100,
            Call::RegisterDesign(NewDesign::new(
                "Ocean Bracelet",
                "Wave-inspired bracelet with sapphires",
                "ipfs://QmDEF123456789",
                vec![MaterialId(5), MaterialId(6)],
            )),
        ))
        .unwrap();

    assert_eq!(
        receipt.result,
        Ok(Outcome::DesignRegistered { id: DesignId(1) })
    );
    let record = deployment.designs().details(DesignId(1)).unwrap();
    assert_eq!(record.artisan, Principal::from(OTHER));
    assert_eq!(record.registration_date, Sequence(100));
}

#[test]
fn ownership_transfer_moves_authority() {
    let mut deployment = deployment();
    deployment
        .apply(Transaction::new(
            ADMIN,
            100,
            Call::TransferAdmin {
                registry: RegistryKind::Artisan,
                new_admin: OTHER.into(),
            },
        ))
        .unwrap()
        .into_result()
        .unwrap();

    let old = deployment
        .apply(Transaction::new(ADMIN, 101, register_artisan("John Doe", "Jeweler")))
        .unwrap();
    assert!(!old.is_success());

    let new = deployment
        .apply(Transaction::new(OTHER, 102, register_artisan("Jane Smith", "Gemstone Expert")))
        .unwrap();
    assert!(new.is_success());
    assert_eq!(
        deployment.query(&Query::Admin {
            registry: RegistryKind::Artisan
        }),
        QueryResponse::Admin(OTHER.into())
    );
}

#[test]
fn snapshot_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut deployment = deployment();
    deployment
        .apply(Transaction::new(ADMIN, 100, register_artisan("John Doe", "Jeweler")))
        .unwrap();
    deployment
        .apply(Transaction::new(
            ADMIN,
            101,
            Call::CertifyMaterial(NewMaterial::new("Gold", "Metal", "24K", "South Africa")),
        ))
        .unwrap();
    deployment
        .apply(Transaction::new(
            OTHER,
            102,
            Call::RegisterDesign(NewDesign::new(
                "Celestial Pendant",
                "A moon and stars pendant with gold and diamonds",
                "ipfs://QmXyZ123456789",
                vec![MaterialId(1)],
            )),
        ))
        .unwrap();
    deployment.save(&path).unwrap();

    let mut restored = Deployment::load(&path).unwrap();
    assert_eq!(restored.artisans(), deployment.artisans());
    assert_eq!(restored.materials(), deployment.materials());
    assert_eq!(restored.designs(), deployment.designs());
    assert_eq!(restored.journal(), deployment.journal());
    assert_eq!(restored.last_sequence(), Some(Sequence(102)));

    // Counters resume where they left off.
    let receipt = restored
        .apply(Transaction::new(
            ADMIN,
            103,
            Call::CertifyMaterial(NewMaterial::new("Diamond", "Gemstone", "VS1", "Botswana")),
        ))
        .unwrap();
    assert_eq!(
        receipt.result,
        Ok(Outcome::MaterialCertified { id: MaterialId(2) })
    );
    assert_eq!(receipt.index, 3);
}
