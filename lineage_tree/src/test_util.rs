// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::person::{Gender, LifeEvent, PersonRecord};

/// Four generations of O'Donovans and Walshes.
///
/// ```text
/// [0]         Cornelius O'Donovan  m. Mary Smith
/// [0,0]         John               m. Ellen O'Neill
/// [0,0,0]         Cornelius "Con"  m. Agnes Monks
/// [0,0,0,0]         Sean           m. Annette McEvoy
/// [0,0,0,1]         Ellen "Nell"
/// [0,0,0,1,0]         Aoife
/// [0,0,1]         Bridget
/// [0,1]         Margaret Walsh     m. Patrick Walsh
/// [0,1,0]         Michael Walsh
/// [0,1,0,0]         Niamh Walsh
/// ```
pub(crate) fn odonovan() -> PersonRecord {
    let aoife = PersonRecord::new("Aoife").with_gender(Gender::Female);
    let mut con = PersonRecord::new("Cornelius")
        .with_nickname("Con")
        .with_last_name("O'Donovan")
        .with_spouse("Agnes Monks")
        .with_gender(Gender::Male)
        .with_child(
            PersonRecord::new("Sean")
                .with_last_name("O'Donovan")
                .with_spouse("Annette McEvoy")
                .with_gender(Gender::Male),
        )
        .with_child(
            PersonRecord::new("Ellen")
                .with_nickname("Nell")
                .with_last_name("O'Donovan")
                .with_gender(Gender::Female)
                .with_child(aoife),
        );
    con.birth = Some(LifeEvent {
        date: Some("1921-03-02".into()),
        location: Some("Cork".into()),
    });

    PersonRecord::new("Cornelius")
        .with_last_name("O'Donovan")
        .with_spouse("Mary Smith")
        .with_gender(Gender::Male)
        .with_colors("#1b4332", "#ffffff")
        .with_child(
            PersonRecord::new("John")
                .with_last_name("O'Donovan")
                .with_spouse("Ellen O'Neill")
                .with_gender(Gender::Male)
                .with_child(con)
                .with_child(
                    PersonRecord::new("Bridget")
                        .with_last_name("O'Donovan")
                        .with_gender(Gender::Female),
                ),
        )
        .with_child(
            PersonRecord::new("Margaret")
                .with_last_name("Walsh")
                .with_spouse("Patrick Walsh")
                .with_gender(Gender::Female)
                .with_colors("#6a040f", "")
                .with_child(
                    PersonRecord::new("Michael")
                        .with_last_name("Walsh")
                        .with_gender(Gender::Male)
                        .with_child(
                            PersonRecord::new("Niamh")
                                .with_last_name("Walsh")
                                .with_gender(Gender::Female),
                        ),
                ),
        )
}
