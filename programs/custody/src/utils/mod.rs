pub mod math;
pub mod validation;

use anchor_lang::prelude::Pubkey;

/// ATA derivation: PDA(owner, token_program_id, mint) under the
/// associated token program.
pub fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}
