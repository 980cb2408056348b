use crate::environment::types::{
    Credentials, NewProfile, Profile, ProfileUpdate, RegisteredUser, TokenPair,
};
use crate::environment::Environment;
use crate::error::Error;
use crate::helper::{append, replace_all, replace_by_id};
use crate::store::Effect;

pub struct AuthReducer;

#[derive(Debug, Clone)]
pub enum AuthAction {
    FetchCredStart,
    FetchCredEnd,
    SetOpenSignIn,
    ResetOpenSignIn,
    SetOpenSignUp,
    ResetOpenSignUp,
    SetOpenProfile,
    ResetOpenProfile,
    /// Local edit of the nickname, persisted by a later `UpdateProfile`
    EditNickname(String),

    Login(Credentials),
    LoginDone(Result<TokenPair, Error>),
    Register(Credentials),
    RegisterDone(Result<RegisteredUser, Error>),
    Logout,

    CreateProfile(NewProfile),
    CreateProfileDone(Result<Profile, Error>),
    UpdateProfile(ProfileUpdate),
    UpdateProfileDone(Result<Profile, Error>),
    GetMyProfile,
    GetMyProfileDone(Result<Profile, Error>),
    GetProfiles,
    GetProfilesDone(Result<Vec<Profile>, Error>),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AuthState {
    pub open_sign_in: bool,
    pub open_sign_up: bool,
    pub open_profile: bool,
    /// An auth or profile request is running
    pub is_loading_auth: bool,
    pub my_profile: Profile,
    pub profiles: im::Vector<Profile>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            open_sign_in: true,
            open_sign_up: false,
            open_profile: false,
            is_loading_auth: false,
            my_profile: Profile::default(),
            profiles: im::Vector::new(),
        }
    }
}

impl AuthState {
    pub fn is_loading_auth(&self) -> bool {
        self.is_loading_auth
    }

    pub fn open_sign_in(&self) -> bool {
        self.open_sign_in
    }

    pub fn open_sign_up(&self) -> bool {
        self.open_sign_up
    }

    pub fn open_profile(&self) -> bool {
        self.open_profile
    }

    pub fn my_profile(&self) -> &Profile {
        &self.my_profile
    }

    pub fn profiles(&self) -> &im::Vector<Profile> {
        &self.profiles
    }

    /// The profile owned by `user`, used to show who wrote a post
    pub fn profile_of(&self, user: i64) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.user_profile == user)
    }
}

pub fn reduce(
    action: AuthAction,
    state: &mut AuthState,
    environment: &Environment,
) -> Effect<AuthAction> {
    log::trace!("{action:?}");
    let model = environment.model.clone();
    match action {
        AuthAction::FetchCredStart => {
            state.is_loading_auth = true;
            Effect::NONE
        }
        AuthAction::FetchCredEnd => {
            state.is_loading_auth = false;
            Effect::NONE
        }
        AuthAction::SetOpenSignIn => {
            state.open_sign_in = true;
            Effect::NONE
        }
        AuthAction::ResetOpenSignIn => {
            state.open_sign_in = false;
            Effect::NONE
        }
        AuthAction::SetOpenSignUp => {
            state.open_sign_up = true;
            Effect::NONE
        }
        AuthAction::ResetOpenSignUp => {
            state.open_sign_up = false;
            Effect::NONE
        }
        AuthAction::SetOpenProfile => {
            state.open_profile = true;
            Effect::NONE
        }
        AuthAction::ResetOpenProfile => {
            state.open_profile = false;
            Effect::NONE
        }
        AuthAction::EditNickname(nick_name) => {
            state.my_profile.nick_name = nick_name;
            Effect::NONE
        }
        AuthAction::Login(credentials) => Effect::future(
            async move { model.login(&credentials).await },
            AuthAction::LoginDone,
        ),
        AuthAction::LoginDone(result) => match result {
            Ok(token) => {
                environment.update_token(&token.access);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        AuthAction::Register(credentials) => Effect::future(
            async move { model.register(&credentials).await },
            AuthAction::RegisterDone,
        ),
        AuthAction::RegisterDone(result) => match result {
            Ok(user) => {
                log::debug!("Registered user {} {}", user.id, user.email);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        AuthAction::Logout => {
            environment.clear_token();
            *state = AuthState::default();
            Effect::NONE
        }
        AuthAction::CreateProfile(profile) => Effect::future(
            async move { model.create_profile(&profile).await },
            AuthAction::CreateProfileDone,
        ),
        AuthAction::CreateProfileDone(result) => match result {
            Ok(profile) => {
                state.profiles = append(&state.profiles, profile.clone());
                state.my_profile = profile;
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        AuthAction::UpdateProfile(profile) => Effect::future(
            async move { model.update_profile(&profile).await },
            AuthAction::UpdateProfileDone,
        ),
        AuthAction::UpdateProfileDone(result) => match result {
            Ok(profile) => {
                state.profiles = replace_by_id(&state.profiles, &profile);
                state.my_profile = profile;
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        AuthAction::GetMyProfile => Effect::future(
            async move { model.my_profile().await },
            AuthAction::GetMyProfileDone,
        ),
        AuthAction::GetMyProfileDone(result) => match result {
            Ok(profile) => {
                state.my_profile = profile;
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
        AuthAction::GetProfiles => Effect::future(
            async move { model.profiles().await },
            AuthAction::GetProfilesDone,
        ),
        AuthAction::GetProfilesDone(result) => match result {
            Ok(profiles) => {
                log::debug!("Loaded {} profiles", profiles.len());
                state.profiles = replace_all(profiles);
                Effect::NONE
            }
            Err(e) => Effect::fail(e),
        },
    }
}
